use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `battop.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BattopConfig {
    /// Polling and display settings.
    pub global: GlobalConfig,
    /// Time-series chart settings.
    pub charts: ChartsConfig,
    /// Color thresholds for gauges.
    pub theme: ThemeConfig,
}

/// Global settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Delay between battery polls in milliseconds.
    pub interval_ms: u64,
    /// Unit system for energy and power readouts.
    pub units: Units,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1_000,
            units: Units::Human,
        }
    }
}

/// Measurement unit system for displaying battery values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// W and Wh.
    #[default]
    #[serde(alias = "h")]
    Human,
    /// mW and mWh, as reported by the kernel.
    #[serde(alias = "r")]
    Raw,
}

impl Units {
    /// Format a power reading given in mW.
    pub fn format_power(self, mw: f64) -> String {
        match self {
            Self::Human => format!("{:.2} W", mw / 1000.0),
            Self::Raw => format!("{mw:.0} mW"),
        }
    }

    /// Format an energy reading given in mWh.
    pub fn format_energy(self, mwh: f64) -> String {
        match self {
            Self::Human => format!("{:.2} Wh", mwh / 1000.0),
            Self::Raw => format!("{mwh:.0} mWh"),
        }
    }

    pub fn format_voltage(self, v: f64) -> String {
        format!("{v:.2} V")
    }
}

/// Settings shared by every chart plus one block per metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Number of samples each chart retains.
    pub capacity: usize,
    pub voltage: ChartConfig,
    pub power: ChartConfig,
    pub charge: ChartConfig,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            capacity: 120,
            voltage: ChartConfig::new("Voltage", "V", "yellow"),
            power: ChartConfig::new("Power", "W", "green"),
            charge: ChartConfig::new("Charge", "%", "cyan"),
        }
    }
}

/// Display settings for a single chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    pub unit: String,
    /// Color name, e.g. `"yellow"`.
    pub color: String,
    /// Fixed lower bound; only used together with `max`.
    #[serde(default)]
    pub min: Option<f64>,
    /// Fixed upper bound; only used together with `min`.
    #[serde(default)]
    pub max: Option<f64>,
}

impl ChartConfig {
    pub fn new(title: impl Into<String>, unit: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            unit: unit.into(),
            color: color.into(),
            min: None,
            max: None,
        }
    }

    /// Manual `(min, max)` scale, if both bounds are configured.
    pub fn manual_scale(&self) -> Option<(f64, f64)> {
        Some((self.min?, self.max?))
    }
}

/// One `{ threshold, color }` step: values `>= threshold` get `color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub threshold: f64,
    pub color: String,
}

impl ThresholdConfig {
    pub fn new(threshold: f64, color: impl Into<String>) -> Self {
        Self {
            threshold,
            color: color.into(),
        }
    }
}

/// Color tables for percentage gauges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Charge gauge steps, checked in order.
    pub charge_thresholds: Vec<ThresholdConfig>,
    /// Color when no charge step matches.
    pub charge_fallback: String,
    /// Health gauge steps, checked in order.
    pub health_thresholds: Vec<ThresholdConfig>,
    /// Color when no health step matches.
    pub health_fallback: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            charge_thresholds: vec![
                ThresholdConfig::new(80.0, "green"),
                ThresholdConfig::new(50.0, "yellow"),
                ThresholdConfig::new(20.0, "orange"),
            ],
            charge_fallback: "red".to_string(),
            health_thresholds: vec![
                ThresholdConfig::new(80.0, "green"),
                ThresholdConfig::new(60.0, "yellow"),
            ],
            health_fallback: "red".to_string(),
        }
    }
}
