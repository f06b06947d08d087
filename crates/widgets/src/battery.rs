use crate::{format_hm, state_color};
use battop_config::Units;
use battop_core::{BatteryInfo, BatteryState};
use battop_theme::{paint, paint_bold, ColorTag, Theme};
use std::fmt::Write;

/// Multi-line battery details: state, identity, voltage, capacity, estimates.
#[derive(Debug, Default)]
pub struct BatteryWidget;

impl BatteryWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, info: &BatteryInfo, units: Units, theme: &Theme) -> String {
        let mut text = String::new();
        let label = |name: &str| paint(ColorTag::Cyan, format!("{name}:"));

        let _ = writeln!(text, "{}", paint_bold(state_color(info.state), info.state.to_string()));
        let _ = writeln!(text, "{}", paint(ColorTag::Gray, "-".repeat(32)));

        if !info.manufacturer.is_empty() {
            let _ = writeln!(text, "{}      {}", label("Make"), info.manufacturer);
        }
        if !info.model.is_empty() {
            let _ = writeln!(text, "{}     {}", label("Model"), info.model);
        }
        let _ = writeln!(text, "{}      {}", label("Type"), info.technology);
        let _ = writeln!(
            text,
            "{}   {} {}",
            label("Voltage"),
            units.format_voltage(info.voltage_v),
            paint(
                ColorTag::Gray,
                format!("(design: {})", units.format_voltage(info.design_voltage_v))
            ),
        );

        text.push('\n');

        let health = info.health();
        let _ = writeln!(text, "{}   {}", label("Current"), units.format_energy(info.current_mwh));
        let _ = writeln!(
            text,
            "{}      {} {}{}{}",
            label("Full"),
            units.format_energy(info.full_mwh),
            paint(ColorTag::Gray, "("),
            paint(theme.health.color_for(health), format!("{health:.1}%")),
            paint(ColorTag::Gray, " health)"),
        );
        let _ = writeln!(text, "{}    {}", label("Design"), units.format_energy(info.design_mwh));

        match info.state {
            BatteryState::Discharging => {
                if let Some(tte) = info.time_to_empty() {
                    let _ = writeln!(
                        text,
                        "\n{}",
                        paint(ColorTag::Orange, format!("Time remaining: {}", format_hm(tte)))
                    );
                }
            }
            BatteryState::Charging => {
                if let Some(ttf) = info.time_to_full() {
                    let _ = writeln!(
                        text,
                        "\n{}",
                        paint(ColorTag::Green, format!("Time to full: {}", format_hm(ttf)))
                    );
                }
            }
            _ => {}
        }

        if info.cycle_count > 0 {
            let _ = writeln!(text, "\n{}    {}", label("Cycles"), info.cycle_count);
        }

        let _ = write!(
            text,
            "\n{}",
            paint(
                ColorTag::Gray,
                format!("Updated: {}", info.updated_at.format("%H:%M:%S"))
            )
        );
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn discharging() -> BatteryInfo {
        BatteryInfo {
            state: BatteryState::Discharging,
            current_mwh: 20_000.0,
            full_mwh: 45_000.0,
            design_mwh: 50_000.0,
            charge_rate_mw: -10_000.0,
            voltage_v: 11.9,
            design_voltage_v: 11.4,
            cycle_count: 87,
            technology: "Li-ion".into(),
            manufacturer: "SMP".into(),
            updated_at: Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 15).unwrap(),
            ..BatteryInfo::default()
        }
    }

    #[test]
    fn discharging_view_shows_time_remaining() {
        let text = BatteryWidget::new().view(&discharging(), Units::Human, &Theme::default());
        let first = text.lines().next().unwrap();
        assert_eq!(first, "[orange:b]Discharging[-]");
        assert!(text.contains("[cyan]Make:[-]      SMP"));
        assert!(!text.contains("Model:"));
        assert!(text.contains("11.90 V [gray](design: 11.40 V)[-]"));
        assert!(text.contains("[cyan]Current:[-]   20.00 Wh"));
        assert!(text.contains("[green]90.0%[-]"));
        assert!(text.contains("[orange]Time remaining: 02:00[-]"));
        assert!(text.contains("[cyan]Cycles:[-]    87"));
        assert!(text.ends_with("[gray]Updated: 09:30:15[-]"));
    }

    #[test]
    fn raw_units_and_charging_estimate() {
        let info = BatteryInfo {
            state: BatteryState::Charging,
            charge_rate_mw: 12_500.0,
            cycle_count: 0,
            ..discharging()
        };
        let text = BatteryWidget::new().view(&info, Units::Raw, &Theme::default());
        assert!(text.contains("20000 mWh"));
        assert!(text.contains("[green]Time to full: 02:00[-]"));
        assert!(!text.contains("Time remaining"));
        assert!(!text.contains("Cycles"));
    }
}
