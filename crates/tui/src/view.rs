//! Per-battery chart history.

use battop_config::{ChartConfig, ChartsConfig};
use battop_core::BatteryInfo;
use battop_renderer::{Chart, ChartSet};
use battop_theme::chart_color;

/// The quantity a chart tracks. Declaration order is stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Voltage,
    Power,
    Charge,
}

impl Metric {
    pub const ALL: [Self; 3] = [Self::Voltage, Self::Power, Self::Charge];

    fn config(self, charts: &ChartsConfig) -> &ChartConfig {
        match self {
            Self::Voltage => &charts.voltage,
            Self::Power => &charts.power,
            Self::Charge => &charts.charge,
        }
    }

    /// Sample value for this metric: volts, signed watts or percent.
    pub fn sample(self, info: &BatteryInfo) -> f64 {
        match self {
            Self::Voltage => info.voltage_v,
            Self::Power => info.charge_rate_mw / 1000.0,
            Self::Charge => info.charge_percent(),
        }
    }
}

/// Everything shown for one battery: its latest reading and its charts.
#[derive(Debug)]
pub struct BatteryView {
    name: String,
    latest: Option<BatteryInfo>,
    charts: ChartSet,
}

impl BatteryView {
    pub fn new(name: impl Into<String>, cfg: &ChartsConfig) -> Self {
        let mut charts = ChartSet::new();
        for metric in Metric::ALL {
            let chart_cfg = metric.config(cfg);
            let mut chart = Chart::new(
                chart_cfg.title.clone(),
                chart_cfg.unit.clone(),
                chart_color(chart_cfg),
                cfg.capacity,
            );
            apply_scale(&mut chart, chart_cfg);
            charts.add_chart(chart);
        }

        Self {
            name: name.into(),
            latest: None,
            charts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latest(&self) -> Option<&BatteryInfo> {
        self.latest.as_ref()
    }

    /// Show `info` in the panel without recording chart samples.
    pub fn set_latest(&mut self, info: BatteryInfo) {
        self.latest = Some(info);
    }

    /// Record one reading in every chart and keep it as the latest.
    pub fn update(&mut self, info: BatteryInfo) {
        for (idx, metric) in Metric::ALL.into_iter().enumerate() {
            if let Some(chart) = self.charts.chart_mut(idx) {
                chart.add_value_at(metric.sample(&info), info.updated_at);
            }
        }
        self.latest = Some(info);
    }

    /// Re-apply titles, units, colors and scales after a config reload.
    ///
    /// Buffer capacity is fixed at construction; history is kept.
    pub fn apply_config(&mut self, cfg: &ChartsConfig) {
        for (idx, metric) in Metric::ALL.into_iter().enumerate() {
            let Some(chart) = self.charts.chart_mut(idx) else {
                continue;
            };
            let chart_cfg = metric.config(cfg);
            chart.set_title(chart_cfg.title.clone());
            chart.set_unit(chart_cfg.unit.clone());
            chart.set_color(chart_color(chart_cfg));
            apply_scale(chart, chart_cfg);
        }
    }

    pub fn charts(&self) -> &ChartSet {
        &self.charts
    }

    /// Size the charts to `width × height` and render them.
    pub fn render_charts(&mut self, width: i32, height: i32) -> String {
        self.charts.set_size(width, height);
        self.charts.render()
    }
}

fn apply_scale(chart: &mut Chart, cfg: &ChartConfig) {
    match cfg.manual_scale() {
        Some((min, max)) => chart.set_scale(min, max),
        None => chart.set_auto_scale(),
    }
}
