//! Battery readings from the Linux sysfs power-supply interface.
//!
//! Energy is reported either as `energy_*` (µWh) or as `charge_*` (µAh),
//! and rate as `power_now` (µW) or `current_now` (µA); charge and current
//! are converted with the battery voltage.

use battop_core::{BattopError, BatteryInfo, BatteryState, Result};
use chrono::Local;
use std::path::Path;

/// Where the kernel exposes power supplies.
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/power_supply";

const DEFAULT_TECHNOLOGY: &str = "Li-ion";

/// Read every system battery under `root`, sorted by name.
///
/// Mains adapters and peripheral batteries (mice, headsets) are skipped.
/// Returns an empty list on machines without a battery.
pub fn read_batteries(root: &Path) -> Result<Vec<BatteryInfo>> {
    let entries = std::fs::read_dir(root)
        .map_err(|e| BattopError::Battery(format!("cannot list '{}': {e}", root.display())))?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| is_system_battery(&entry.path()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    names
        .iter()
        .enumerate()
        .map(|(index, name)| read_battery(&root.join(name), index, name))
        .collect()
}

fn is_system_battery(dir: &Path) -> bool {
    let is_battery = read_string(&dir.join("type")).is_some_and(|t| t == "Battery");
    let is_device = read_string(&dir.join("scope")).is_some_and(|s| s == "Device");
    is_battery && !is_device
}

fn read_battery(dir: &Path, index: usize, name: &str) -> Result<BatteryInfo> {
    let micro = |attr: &str| read_f64(&dir.join(attr)).map(|v| v / 1_000_000.0);

    let voltage_v = micro("voltage_now").unwrap_or(0.0);
    let design_voltage_v = micro("voltage_min_design")
        .or_else(|| micro("voltage_max_design"))
        .unwrap_or(voltage_v);

    // Wh = Ah × V; everything below ends up in milli-units.
    let (current_mwh, full_mwh, design_mwh) = if let Some(now) = micro("energy_now") {
        (
            now * 1000.0,
            micro("energy_full").unwrap_or(0.0) * 1000.0,
            micro("energy_full_design").unwrap_or(0.0) * 1000.0,
        )
    } else if let Some(now) = micro("charge_now") {
        let v = if design_voltage_v > 0.0 { design_voltage_v } else { voltage_v };
        (
            now * v * 1000.0,
            micro("charge_full").unwrap_or(0.0) * v * 1000.0,
            micro("charge_full_design").unwrap_or(0.0) * v * 1000.0,
        )
    } else {
        return Err(BattopError::Battery(format!(
            "{name}: no energy or charge readings"
        )));
    };

    let rate_mw = micro("power_now")
        .or_else(|| micro("current_now").map(|a| a * voltage_v))
        .unwrap_or(0.0)
        * 1000.0;

    let state = read_string(&dir.join("status"))
        .map(|s| BatteryState::from_status(&s))
        .unwrap_or_default();

    let info = BatteryInfo {
        index,
        name: name.to_string(),
        state,
        current_mwh,
        full_mwh,
        design_mwh,
        charge_rate_mw: normalize_rate(rate_mw, state),
        voltage_v,
        design_voltage_v,
        cycle_count: read_f64(&dir.join("cycle_count")).map_or(0, |c| c.max(0.0) as u32),
        technology: read_string(&dir.join("technology"))
            .filter(|t| !t.is_empty() && t != "Unknown")
            .unwrap_or_else(|| DEFAULT_TECHNOLOGY.to_string()),
        manufacturer: read_string(&dir.join("manufacturer")).unwrap_or_default(),
        model: read_string(&dir.join("model_name")).unwrap_or_default(),
        serial: read_string(&dir.join("serial_number")).unwrap_or_default(),
        updated_at: Local::now(),
    };

    tracing::debug!(
        index,
        name,
        state = %info.state,
        current_mwh = info.current_mwh,
        full_mwh = info.full_mwh,
        charge_rate_mw = info.charge_rate_mw,
        voltage_v = info.voltage_v,
        "Read battery"
    );

    Ok(info)
}

/// Some firmware reports an unsigned rate; make it negative while discharging.
fn normalize_rate(rate_mw: f64, state: BatteryState) -> f64 {
    match state {
        BatteryState::Discharging => -rate_mw.abs(),
        BatteryState::Charging => rate_mw.abs(),
        _ => rate_mw,
    }
}

fn read_string(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
}

fn read_f64(path: &Path) -> Option<f64> {
    read_string(path)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_supply(root: &Path, name: &str, attrs: &[(&str, &str)]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        for (attr, value) in attrs {
            fs::write(dir.join(attr), format!("{value}\n")).unwrap();
        }
    }

    #[test]
    fn reads_energy_based_battery() {
        let root = tempfile::tempdir().unwrap();
        write_supply(
            root.path(),
            "BAT0",
            &[
                ("type", "Battery"),
                ("status", "Discharging"),
                ("energy_now", "25000000"),
                ("energy_full", "50000000"),
                ("energy_full_design", "57000000"),
                ("power_now", "8500000"),
                ("voltage_now", "12100000"),
                ("voltage_min_design", "11400000"),
                ("cycle_count", "321"),
                ("manufacturer", "SMP"),
                ("model_name", "5B10W13930"),
            ],
        );

        let batteries = read_batteries(root.path()).unwrap();
        assert_eq!(batteries.len(), 1);
        let bat = &batteries[0];
        assert_eq!(bat.name, "BAT0");
        assert_eq!(bat.state, BatteryState::Discharging);
        assert!((bat.current_mwh - 25_000.0).abs() < 1e-6);
        assert!((bat.full_mwh - 50_000.0).abs() < 1e-6);
        assert!((bat.charge_rate_mw + 8_500.0).abs() < 1e-6);
        assert!((bat.voltage_v - 12.1).abs() < 1e-9);
        assert!((bat.design_voltage_v - 11.4).abs() < 1e-9);
        assert_eq!(bat.cycle_count, 321);
        assert_eq!(bat.technology, "Li-ion");
        assert_eq!(bat.model, "5B10W13930");
        assert!((bat.charge_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn converts_charge_and_current_with_voltage() {
        let root = tempfile::tempdir().unwrap();
        write_supply(
            root.path(),
            "BAT1",
            &[
                ("type", "Battery"),
                ("status", "Charging"),
                ("charge_now", "2000000"),
                ("charge_full", "4000000"),
                ("charge_full_design", "5000000"),
                ("current_now", "-1000000"),
                ("voltage_now", "10000000"),
                ("technology", "Li-poly"),
            ],
        );

        let bat = &read_batteries(root.path()).unwrap()[0];
        // 2 Ah × 10 V = 20 Wh.
        assert!((bat.current_mwh - 20_000.0).abs() < 1e-6);
        assert!((bat.design_mwh - 50_000.0).abs() < 1e-6);
        assert!((bat.charge_rate_mw - 10_000.0).abs() < 1e-6);
        assert_eq!(bat.technology, "Li-poly");
    }

    #[test]
    fn skips_mains_and_peripherals_and_sorts_by_name() {
        let root = tempfile::tempdir().unwrap();
        let energy = [("energy_now", "1000000"), ("energy_full", "2000000")];
        write_supply(root.path(), "AC", &[("type", "Mains"), ("online", "1")]);
        write_supply(
            root.path(),
            "hidpp_battery_0",
            &[("type", "Battery"), ("scope", "Device"), energy[0], energy[1]],
        );
        write_supply(root.path(), "BAT1", &[("type", "Battery"), energy[0], energy[1]]);
        write_supply(root.path(), "BAT0", &[("type", "Battery"), energy[0], energy[1]]);

        let names: Vec<_> = read_batteries(root.path())
            .unwrap()
            .into_iter()
            .map(|b| (b.index, b.name))
            .collect();
        assert_eq!(names, vec![(0, "BAT0".to_string()), (1, "BAT1".to_string())]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let err = read_batteries(&root.path().join("absent")).unwrap_err();
        assert!(matches!(err, BattopError::Battery(_)));
    }

    #[test]
    fn battery_without_readings_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        write_supply(root.path(), "BAT0", &[("type", "Battery"), ("capacity", "80")]);
        assert!(read_batteries(root.path()).is_err());
    }

    #[test]
    fn rate_sign_follows_state() {
        assert_eq!(normalize_rate(5.0, BatteryState::Discharging), -5.0);
        assert_eq!(normalize_rate(-5.0, BatteryState::Charging), 5.0);
        assert_eq!(normalize_rate(0.0, BatteryState::Full), 0.0);
    }
}
