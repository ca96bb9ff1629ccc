//! Battery level tracking.
//!
//! The host's power service pushes charge reports; the renderer only ever
//! reads the last stored value.

use core::sync::atomic::{AtomicU8, Ordering};

/// One report from the host's battery subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryReport {
    /// Charge in percent, 0-100.
    pub percent: u8,
    /// Whether the charger is connected.
    pub charging: bool,
}

impl BatteryReport {
    fn clamped(self) -> Self {
        Self {
            percent: self.percent.min(100),
            charging: self.charging,
        }
    }
}

/// Last known battery state.
///
/// Written by the battery callback, read at render time. Getters return
/// the stored value; feed fresh reports through [`update`](Self::update).
#[derive(Debug, Clone, Copy)]
pub struct BatteryMonitor {
    report: BatteryReport,
}

impl BatteryMonitor {
    /// Start at full charge until the host delivers the first report.
    pub const fn new() -> Self {
        Self {
            report: BatteryReport {
                percent: 100,
                charging: false,
            },
        }
    }

    /// Record a new report. Returns whether the stored state changed.
    pub fn update(&mut self, report: BatteryReport) -> bool {
        if report.percent > 100 {
            warn!("battery percent {} out of range, clamping", report.percent);
        }
        let report = report.clamped();
        if report == self.report {
            return false;
        }
        self.report = report;
        true
    }

    /// Charge in percent, 0-100.
    pub fn percent(&self) -> u8 {
        self.report.percent
    }

    /// Whether the charger is connected.
    pub fn is_charging(&self) -> bool {
        self.report.charging
    }

    /// The stored report.
    pub fn report(&self) -> BatteryReport {
        self.report
    }
}

impl Default for BatteryMonitor {
    fn default() -> Self {
        Self::new()
    }
}

/// Battery percent cell for hosts whose power callback runs in another
/// execution context than the renderer.
///
/// Relaxed load and store only, no read-modify-write, so it works on
/// cores without atomic CAS.
pub struct SharedBatteryLevel(AtomicU8);

impl SharedBatteryLevel {
    pub const fn new(percent: u8) -> Self {
        Self(AtomicU8::new(percent))
    }

    /// Store a fresh percent, clamped into range.
    pub fn set(&self, percent: u8) {
        self.0.store(percent.min(100), Ordering::Relaxed);
    }

    /// Latest stored percent.
    pub fn get(&self) -> u8 {
        self.0.load(Ordering::Relaxed)
    }
}
