//! Clock hand geometry.
//!
//! Pure functions from wall-clock fields to device coordinates. Angles use
//! a fixed-point full-turn unit, so everything stays integer until the one
//! trig step that rotates a hand polygon. All inputs are clamped into
//! range; a render tick never fails.

use embedded_graphics::geometry::Point;
use libm::{cosf, roundf, sinf};

/// Number of [`Angle`] units in one full turn.
pub const FULL_TURN: u32 = 0x1_0000;

const RAD_PER_UNIT: f32 = core::f32::consts::TAU / FULL_TURN as f32;

/// Fixed-point angle, 65536 units per turn, clockwise from 12 o'clock.
///
/// Stored in a `u16` so a whole turn wraps to zero on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Angle(u16);

impl Angle {
    pub const ZERO: Self = Self(0);

    /// Angle from whole degrees, normalized into a single turn.
    pub fn from_degrees(degrees: i32) -> Self {
        let deg = degrees.rem_euclid(360) as u32;
        Self((deg * FULL_TURN / 360) as u16)
    }

    /// Angle from raw full-turn units.
    pub const fn from_units(units: u16) -> Self {
        Self(units)
    }

    /// Raw full-turn units.
    pub const fn units(self) -> u16 {
        self.0
    }

    fn to_radians(self) -> f32 {
        f32::from(self.0) * RAD_PER_UNIT
    }
}

/// Local-coordinate silhouette of a hand: a four-corner polygon around the
/// pivot, negative y toward the tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandShape {
    points: [Point; 4],
}

impl HandShape {
    /// Corner points relative to the pivot.
    pub const fn points(&self) -> [Point; 4] {
        self.points
    }
}

/// Short hour hand, 8 px wide with a 15 px tail.
pub const HOUR_HAND: HandShape = HandShape {
    points: [
        Point::new(-4, 15),
        Point::new(4, 15),
        Point::new(4, -50),
        Point::new(-4, -50),
    ],
};

/// Long minute hand, same width and tail as the hour hand.
pub const MINUTE_HAND: HandShape = HandShape {
    points: [
        Point::new(-4, 15),
        Point::new(4, 15),
        Point::new(4, -70),
        Point::new(-4, -70),
    ],
};

/// Hour hand angle for the given wall-clock fields.
///
/// Advances half a degree per minute, in whole-degree steps.
pub fn hour_hand_angle(hour: u8, minute: u8) -> Angle {
    let hour = i32::from(hour % 12);
    let minute = i32::from(minute.min(59));
    Angle::from_degrees(hour * 30 + minute / 2)
}

/// Minute hand angle for the given wall-clock fields.
///
/// Seconds contribute one degree per 10 s step.
pub fn minute_hand_angle(minute: u8, second: u8) -> Angle {
    let minute = i32::from(minute.min(59));
    let second = i32::from(second.min(59));
    Angle::from_degrees(minute * 6 + second / 10)
}

/// Place a hand on the face: rotate the local polygon clockwise by `angle`
/// and pin its pivot to `center`.
///
/// Screen coordinates, y down. Corners round to the nearest device pixel.
pub fn place_hand(shape: &HandShape, center: Point, angle: Angle) -> [Point; 4] {
    let rad = angle.to_radians();
    let (sin, cos) = (sinf(rad), cosf(rad));
    shape.points.map(|p| {
        let (x, y) = (p.x as f32, p.y as f32);
        Point::new(
            center.x + roundf(x * cos - y * sin) as i32,
            center.y + roundf(x * sin + y * cos) as i32,
        )
    })
}

/// Filled width of a battery bar holding `percent` charge, floor division.
pub fn battery_bar_width(percent: u8, max_width: u32) -> u32 {
    u32::from(percent.min(100)) * max_width / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_map_to_full_turn_units() {
        assert_eq!(Angle::from_degrees(0).units(), 0);
        assert_eq!(Angle::from_degrees(90).units(), 16384);
        assert_eq!(Angle::from_degrees(180).units(), 32768);
        assert_eq!(Angle::from_degrees(360).units(), 0);
        assert_eq!(Angle::from_degrees(-90), Angle::from_degrees(270));
        assert_eq!(Angle::from_degrees(390), Angle::from_degrees(30));
    }

    #[test]
    fn hour_angle_repeats_every_twelve_hours() {
        for hour in 0..24u8 {
            for minute in [0u8, 17, 30, 59] {
                assert_eq!(
                    hour_hand_angle(hour, minute),
                    hour_hand_angle(hour % 12, minute)
                );
            }
        }
    }

    #[test]
    fn hour_angle_never_decreases_within_a_cycle() {
        let mut last = hour_hand_angle(0, 0);
        for hour in 0..12u8 {
            for minute in 0..60u8 {
                let angle = hour_hand_angle(hour, minute);
                assert!(angle >= last, "hour {hour} minute {minute}");
                last = angle;
            }
        }
    }

    #[test]
    fn minute_angle_hits_the_quarter_marks() {
        assert_eq!(minute_hand_angle(0, 0), Angle::ZERO);
        assert_eq!(minute_hand_angle(15, 0), Angle::from_degrees(90));
        assert_eq!(minute_hand_angle(30, 0), Angle::from_degrees(180));
        assert_eq!(minute_hand_angle(45, 0), Angle::from_degrees(270));
    }

    #[test]
    fn seconds_nudge_the_minute_hand_in_ten_second_steps() {
        assert_eq!(minute_hand_angle(0, 9), Angle::ZERO);
        assert_eq!(minute_hand_angle(0, 10), Angle::from_degrees(1));
        assert_eq!(minute_hand_angle(0, 59), Angle::from_degrees(5));
    }

    #[test]
    fn place_hand_at_zero_only_translates() {
        let placed = place_hand(&HOUR_HAND, Point::new(90, 90), Angle::ZERO);
        assert_eq!(
            placed,
            [
                Point::new(86, 105),
                Point::new(94, 105),
                Point::new(94, 40),
                Point::new(86, 40),
            ]
        );
    }

    #[test]
    fn place_hand_at_half_turn_negates_offsets() {
        let placed = place_hand(&HOUR_HAND, Point::new(90, 90), Angle::from_degrees(180));
        assert_eq!(
            placed,
            [
                Point::new(94, 75),
                Point::new(86, 75),
                Point::new(86, 140),
                Point::new(94, 140),
            ]
        );
    }

    #[test]
    fn place_hand_at_quarter_turn_points_at_three_oclock() {
        let placed = place_hand(&HOUR_HAND, Point::new(90, 90), Angle::from_degrees(90));
        assert_eq!(
            placed,
            [
                Point::new(75, 86),
                Point::new(75, 94),
                Point::new(140, 94),
                Point::new(140, 86),
            ]
        );
    }

    #[test]
    fn battery_bar_width_floors() {
        assert_eq!(battery_bar_width(50, 23), 11);
        assert_eq!(battery_bar_width(0, 23), 0);
        assert_eq!(battery_bar_width(100, 23), 23);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(hour_hand_angle(30, 61), hour_hand_angle(6, 59));
        assert_eq!(minute_hand_angle(200, 200), minute_hand_angle(59, 59));
        assert_eq!(battery_bar_width(150, 23), 23);
    }

    #[test]
    fn placement_is_a_pure_function() {
        let center = Point::new(72, 84);
        let angle = hour_hand_angle(10, 42);
        assert_eq!(
            place_hand(&MINUTE_HAND, center, angle),
            place_hand(&MINUTE_HAND, center, angle)
        );
        assert_eq!(hour_hand_angle(10, 42), hour_hand_angle(10, 42));
    }
}
