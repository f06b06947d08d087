//! Left-panel widgets. Each renders a marked-up string for the current reading.

pub mod battery;
pub mod gauge;
pub mod help;

pub use battery::BatteryWidget;
pub use gauge::{ChargeGauge, HealthGauge, PowerGauge};
pub use help::HelpWidget;

use battop_core::BatteryState;
use battop_theme::ColorTag;
use std::time::Duration;

/// Color used for a battery state label.
pub fn state_color(state: BatteryState) -> ColorTag {
    match state {
        BatteryState::Charging | BatteryState::Full => ColorTag::Green,
        BatteryState::Discharging => ColorTag::Orange,
        BatteryState::Empty => ColorTag::Red,
        BatteryState::NotCharging => ColorTag::Yellow,
        BatteryState::Unknown => ColorTag::White,
    }
}

/// Format a duration as `HH:MM`.
pub fn format_hm(d: Duration) -> String {
    let mins = d.as_secs() / 60;
    format!("{:02}:{:02}", mins / 60, mins % 60)
}
