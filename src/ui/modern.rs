//! The "modern" analog face: white hands with black outlines, a battery
//! bar, and day-of-month and weekday readouts.

use chrono::{Datelike, NaiveDateTime, Timelike};
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    primitives::{Circle, Polyline, Primitive, PrimitiveStyle, Rectangle, Triangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable,
};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT};

use super::Watchface;
use crate::battery::{BatteryMonitor, BatteryReport};
use crate::geometry::{
    battery_bar_width, hour_hand_angle, minute_hand_angle, place_hand, HOUR_HAND, MINUTE_HAND,
};
use crate::host::TickUnit;

/// Weekday names, ISO order.
const WEEKDAYS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// Element placement, in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Battery bar frame.
    pub battery_bar: Rectangle,
    /// Travel of the battery fill inside the frame, in pixels.
    pub battery_fill_travel: u32,
    /// Day-of-month box, dark text.
    pub date_box: Rectangle,
    /// Weekday box, light text.
    pub weekday_box: Rectangle,
}

impl Default for Layout {
    /// Placement for a 144x168 panel.
    fn default() -> Self {
        Self {
            battery_bar: Rectangle::new(Point::new(60, 26), Size::new(24, 2)),
            battery_fill_travel: 23,
            date_box: Rectangle::new(Point::new(116, 77), Size::new(20, 20)),
            weekday_box: Rectangle::new(Point::new(32, 42), Size::new(80, 20)),
        }
    }
}

/// Analog face with battery bar and date readouts.
///
/// Holds everything a redraw needs: the layout, the pivot point, and the
/// last delivered time and battery state.
pub struct ModernFace {
    layout: Layout,
    center: Point,
    time: NaiveDateTime,
    battery: BatteryMonitor,
}

impl ModernFace {
    /// Face with the default layout, hands pivoting on the center of
    /// `bounds`.
    pub fn new(bounds: Rectangle) -> Self {
        Self::with_layout(bounds, Layout::default())
    }

    pub fn with_layout(bounds: Rectangle, layout: Layout) -> Self {
        Self {
            layout,
            center: bounds.center(),
            time: NaiveDateTime::default(),
            battery: BatteryMonitor::new(),
        }
    }

    /// Last delivered battery charge in percent.
    pub fn battery_percent(&self) -> u8 {
        self.battery.percent()
    }

    fn draw_hands<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let hour = place_hand(
            &HOUR_HAND,
            self.center,
            hour_hand_angle(self.time.hour() as u8, self.time.minute() as u8),
        );
        let minute = place_hand(
            &MINUTE_HAND,
            self.center,
            minute_hand_angle(self.time.minute() as u8, self.time.second() as u8),
        );

        draw_hand_polygon(&hour, display)?;
        draw_hand_polygon(&minute, display)?;
        self.draw_center_pin(display)
    }

    fn draw_center_pin<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        // 4 px black pin under a 3 px white cap.
        Circle::with_center(self.center, 9)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(display)?;
        Circle::with_center(self.center, 7)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display)
    }

    fn draw_battery_bar<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        self.layout
            .battery_bar
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(display)?;

        let width = battery_bar_width(self.battery.percent(), self.layout.battery_fill_travel);
        Rectangle::new(
            self.layout.battery_bar.top_left,
            Size::new(width, self.layout.battery_bar.size.height),
        )
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(display)
    }

    fn draw_readouts<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let centered = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        let mut buf = [0u8; 4];
        let day = format_no_std::show(&mut buf, format_args!("{:02}", self.time.day()))
            .unwrap_or("--");
        Text::with_text_style(
            day,
            self.layout.date_box.center(),
            MonoTextStyle::new(&PROFONT_12_POINT, BinaryColor::Off),
            centered,
        )
        .draw(display)?;

        let weekday = WEEKDAYS[self.time.weekday().num_days_from_monday() as usize];
        Text::with_text_style(
            weekday,
            self.layout.weekday_box.center(),
            MonoTextStyle::new(&PROFONT_14_POINT, BinaryColor::On),
            centered,
        )
        .draw(display)?;

        Ok(())
    }
}

impl Watchface for ModernFace {
    fn tick_unit(&self) -> TickUnit {
        // Hands advance on minute boundaries only.
        TickUnit::Minute
    }

    fn on_tick(&mut self, time: NaiveDateTime) {
        self.time = time;
    }

    fn on_battery_change(&mut self, report: BatteryReport) {
        if self.battery.update(report) {
            debug!("battery level now {}%", self.battery.percent());
        }
    }

    fn draw<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        self.draw_hands(display)?;
        self.draw_battery_bar(display)?;
        self.draw_readouts(display)
    }
}

/// Fill a hand polygon white and stroke it black.
fn draw_hand_polygon<D>(corners: &[Point; 4], display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    // No filled-quad primitive; split along a diagonal.
    let fill = PrimitiveStyle::with_fill(BinaryColor::On);
    Triangle::new(corners[0], corners[1], corners[2])
        .into_styled(fill)
        .draw(display)?;
    Triangle::new(corners[0], corners[2], corners[3])
        .into_styled(fill)
        .draw(display)?;

    let outline = [corners[0], corners[1], corners[2], corners[3], corners[0]];
    Polyline::new(&outline)
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::Off, 1))
        .draw(display)
}
