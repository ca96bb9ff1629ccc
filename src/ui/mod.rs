//! Watch face definitions.

use chrono::NaiveDateTime;
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::BinaryColor};

use crate::battery::BatteryReport;
use crate::host::TickUnit;

pub mod modern;

/// A face the host event loop can drive.
///
/// The host adapter owns the subscriptions; a face only receives events
/// and renders on demand. All methods are synchronous and complete within
/// one callback invocation.
pub trait Watchface {
    /// Tick granularity the face wants redraws scheduled at.
    fn tick_unit(&self) -> TickUnit;

    /// Wall-clock tick, delivered at the face's tick unit.
    fn on_tick(&mut self, time: NaiveDateTime);

    /// Battery subscription callback, delivered when the report changes.
    fn on_battery_change(&mut self, report: BatteryReport);

    /// Render the face's layers into the display.
    ///
    /// The host composes any background artwork first; a face paints only
    /// its own layers.
    fn draw<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>;
}
