//! Host adapter seam.
//!
//! The embedding platform owns the event loop, the display, and the power
//! service. This module is the glue it drives: source traits the platform
//! implements, and a [`Dispatcher`] that turns polled state into face
//! events and redraws. Everything runs on the caller's thread; callbacks
//! fire sequentially within one [`Dispatcher::poll`].

use chrono::{NaiveDateTime, Timelike};
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::BinaryColor};

use crate::battery::BatteryReport;
use crate::ui::Watchface;

/// Clock query answered by the platform, sampled once per render.
pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

/// Battery query answered by the platform's power service.
pub trait BatterySource {
    fn report(&mut self) -> BatteryReport;
}

/// Granularity at which a face wants tick events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl TickUnit {
    /// Whether moving from `prev` to `next` crosses a boundary of this
    /// unit. Sub-second precision is ignored.
    pub fn crossed(self, prev: NaiveDateTime, next: NaiveDateTime) -> bool {
        let key = |dt: NaiveDateTime| {
            let time = dt.time();
            match self {
                TickUnit::Second => (dt.date(), time.num_seconds_from_midnight()),
                TickUnit::Minute => (dt.date(), time.num_seconds_from_midnight() / 60),
                TickUnit::Hour => (dt.date(), time.hour()),
                TickUnit::Day => (dt.date(), 0),
            }
        };
        key(prev) != key(next)
    }
}

/// Owns a face and feeds it host state.
///
/// Pull-mode counterpart of a tick and battery subscription: the platform
/// calls [`poll`](Self::poll) from its loop or timer, and the dispatcher
/// decides whether the face gets an event and whether the frame is drawn.
pub struct Dispatcher<F, T, B> {
    face: F,
    clock: T,
    battery: B,
    last_tick: Option<NaiveDateTime>,
    last_report: Option<BatteryReport>,
    dirty: bool,
}

impl<F, T, B> Dispatcher<F, T, B>
where
    F: Watchface,
    T: TimeSource,
    B: BatterySource,
{
    /// New dispatcher. The first poll always ticks and draws.
    pub fn new(face: F, clock: T, battery: B) -> Self {
        Self {
            face,
            clock,
            battery,
            last_tick: None,
            last_report: None,
            dirty: true,
        }
    }

    /// Request a redraw on the next poll, outside the tick schedule.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn face(&self) -> &F {
        &self.face
    }

    pub fn face_mut(&mut self) -> &mut F {
        &mut self.face
    }

    /// Poll the sources, forward events, and redraw if anything changed.
    ///
    /// Returns whether the display was drawn to.
    pub fn poll<D>(&mut self, display: &mut D) -> Result<bool, D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let report = self.battery.report();
        if self.last_report != Some(report) {
            self.last_report = Some(report);
            info!("battery report: {}%", report.percent);
            self.face.on_battery_change(report);
            self.dirty = true;
        }

        let now = self.clock.now();
        let ticked = match self.last_tick {
            None => true,
            Some(prev) => self.face.tick_unit().crossed(prev, now),
        };
        if ticked {
            self.last_tick = Some(now);
            debug!("tick at {}:{}", now.hour(), now.minute());
            self.face.on_tick(now);
            self.dirty = true;
        }

        if !self.dirty {
            return Ok(false);
        }
        self.face.draw(display)?;
        self.dirty = false;
        Ok(true)
    }
}
