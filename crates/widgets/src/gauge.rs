use battop_config::Units;
use battop_core::BatteryInfo;
use battop_theme::{paint, ColorTag, Theme};

/// Cells in a gauge bar.
pub const GAUGE_WIDTH: usize = 20;

/// `[color]=====-----[-]` bar filled to `percent`.
pub fn gauge_bar(percent: f64, width: usize, color: ColorTag) -> String {
    let filled = ((percent * width as f64 / 100.0) as i64).clamp(0, width as i64) as usize;
    paint(color, format!("{}{}", "=".repeat(filled), "-".repeat(width - filled)))
}

fn percent_gauge(percent: f64, color: ColorTag) -> String {
    format!(
        " {} {}",
        gauge_bar(percent, GAUGE_WIDTH, color),
        paint(color, format!("{percent:.1}%"))
    )
}

/// Charge level bar, colored by the theme's charge table.
#[derive(Debug, Default)]
pub struct ChargeGauge;

impl ChargeGauge {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, info: &BatteryInfo, theme: &Theme) -> String {
        let pct = info.charge_percent();
        percent_gauge(pct, theme.charge.color_for(pct))
    }
}

/// Charge/discharge direction and rate.
#[derive(Debug, Default)]
pub struct PowerGauge;

impl PowerGauge {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, info: &BatteryInfo, units: Units) -> String {
        let rate = info.charge_rate_mw;
        let power = units.format_power(rate.abs());
        if rate > 0.0 {
            format!(" {} {}", paint(ColorTag::Green, ">>> CHARGING"), paint(ColorTag::White, power))
        } else if rate < 0.0 {
            format!(
                " {} {}",
                paint(ColorTag::Orange, "<<< DISCHARGING"),
                paint(ColorTag::White, power)
            )
        } else {
            format!(" {} {}", paint(ColorTag::Gray, "=== IDLE"), paint(ColorTag::Gray, power))
        }
    }
}

/// Health bar, colored by the theme's health table.
#[derive(Debug, Default)]
pub struct HealthGauge;

impl HealthGauge {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, info: &BatteryInfo, theme: &Theme) -> String {
        let pct = info.health();
        percent_gauge(pct, theme.health.color_for(pct))
    }
}
