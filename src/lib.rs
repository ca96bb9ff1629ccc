//! Analog watch-face engine for 1-bit embedded displays.
//!
//! Renders a classic analog face (rotating hour and minute hands, a
//! battery-level bar, day and weekday readouts) into any
//! [`DrawTarget`](embedded_graphics::draw_target::DrawTarget). The crate
//! owns no event loop and no hardware: the embedding platform samples its
//! clock and power service, then either feeds a [`ui::Watchface`] directly
//! or lets a [`host::Dispatcher`] handle tick cadence and change detection.

#![no_std]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod battery;
pub mod geometry;
pub mod host;
pub mod ui;

pub use battery::{BatteryMonitor, BatteryReport, SharedBatteryLevel};
pub use geometry::{Angle, HandShape, HOUR_HAND, MINUTE_HAND};
pub use host::{BatterySource, Dispatcher, TickUnit, TimeSource};
pub use ui::{modern::ModernFace, Watchface};
