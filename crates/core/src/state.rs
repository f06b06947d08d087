use chrono::{DateTime, Local};
use std::fmt;
use std::time::Duration;

/// Charging state as reported by the power-supply `status` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatteryState {
    #[default]
    Unknown,
    Empty,
    Full,
    Charging,
    Discharging,
    NotCharging,
}

impl BatteryState {
    /// Parse the kernel's status string (`"Charging"`, `"Not charging"`, …).
    pub fn from_status(status: &str) -> Self {
        match status.trim() {
            "Empty" => Self::Empty,
            "Full" => Self::Full,
            "Charging" => Self::Charging,
            "Discharging" => Self::Discharging,
            "Not charging" => Self::NotCharging,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for BatteryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unknown => "Unknown",
            Self::Empty => "Empty",
            Self::Full => "Full",
            Self::Charging => "Charging",
            Self::Discharging => "Discharging",
            Self::NotCharging => "Not charging",
        };
        f.write_str(s)
    }
}

/// A point-in-time reading of one battery.
#[derive(Debug, Clone)]
pub struct BatteryInfo {
    /// Position in the sorted battery list (0-based).
    pub index: usize,
    /// Power-supply name, e.g. `"BAT0"`.
    pub name: String,
    pub state: BatteryState,
    /// Remaining energy in mWh.
    pub current_mwh: f64,
    /// Energy at last full charge in mWh.
    pub full_mwh: f64,
    /// Factory design capacity in mWh.
    pub design_mwh: f64,
    /// mW; positive = charging, negative = discharging.
    pub charge_rate_mw: f64,
    pub voltage_v: f64,
    pub design_voltage_v: f64,
    /// `0` when the kernel doesn't report it.
    pub cycle_count: u32,
    pub technology: String,
    pub manufacturer: String,
    pub model: String,
    pub serial: String,
    pub updated_at: DateTime<Local>,
}

impl Default for BatteryInfo {
    fn default() -> Self {
        Self {
            index: 0,
            name: String::new(),
            state: BatteryState::Unknown,
            current_mwh: 0.0,
            full_mwh: 0.0,
            design_mwh: 0.0,
            charge_rate_mw: 0.0,
            voltage_v: 0.0,
            design_voltage_v: 0.0,
            cycle_count: 0,
            technology: String::new(),
            manufacturer: String::new(),
            model: String::new(),
            serial: String::new(),
            updated_at: Local::now(),
        }
    }
}

impl BatteryInfo {
    /// Charge level in `[0, 100]`; `0` if the full capacity is unknown.
    #[must_use]
    pub fn charge_percent(&self) -> f64 {
        if self.full_mwh <= 0.0 {
            return 0.0;
        }
        (self.current_mwh / self.full_mwh * 100.0).clamp(0.0, 100.0)
    }

    /// Full capacity relative to design capacity, in `[0, 100]`.
    #[must_use]
    pub fn health(&self) -> f64 {
        if self.design_mwh <= 0.0 {
            return 0.0;
        }
        (self.full_mwh / self.design_mwh * 100.0).clamp(0.0, 100.0)
    }

    /// Estimated time until empty while discharging, `None` otherwise.
    #[must_use]
    pub fn time_to_empty(&self) -> Option<Duration> {
        if self.charge_rate_mw >= 0.0 || self.current_mwh <= 0.0 {
            return None;
        }
        hours_to_duration(self.current_mwh / -self.charge_rate_mw)
    }

    /// Estimated time until full while charging, `None` otherwise.
    #[must_use]
    pub fn time_to_full(&self) -> Option<Duration> {
        if self.charge_rate_mw <= 0.0 || self.full_mwh <= self.current_mwh {
            return None;
        }
        hours_to_duration((self.full_mwh - self.current_mwh) / self.charge_rate_mw)
    }
}

fn hours_to_duration(hours: f64) -> Option<Duration> {
    if !hours.is_finite() || hours <= 0.0 {
        return None;
    }
    Some(Duration::from_secs_f64(hours * 3600.0))
}
