//! Dashboard state and message handling.

use crate::view::BatteryView;
use battop_config::{load as load_config, BattopConfig, Units};
use battop_core::{BatteryInfo, Message};
use battop_theme::Theme;
use battop_widgets::{BatteryWidget, ChargeGauge, HealthGauge, HelpWidget, PowerGauge};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

const MONITORING_TITLE: &str = " Real-time Monitoring ";

/// Where the dashboard reads from, plus command-line overrides that
/// survive config reloads.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config_path: PathBuf,
    pub sysfs_root: PathBuf,
    pub interval_override: Option<Duration>,
    pub units_override: Option<Units>,
}

/// Follow-up work the event loop must do after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The poll interval changed; restart the battery monitor.
    RestartMonitor(Duration),
}

pub struct App {
    options: RunOptions,
    config: BattopConfig,
    theme: Theme,
    views: Vec<BatteryView>,
    active: usize,
    last_error: Option<String>,
    should_quit: bool,
    // Left panel
    battery: BatteryWidget,
    charge: ChargeGauge,
    power: PowerGauge,
    health: HealthGauge,
    // Footer
    help: HelpWidget,
}

impl App {
    /// Build the dashboard and seed every chart with the initial readings.
    pub fn new(config: BattopConfig, options: RunOptions, batteries: Vec<BatteryInfo>) -> Self {
        let theme = Theme::from_config(&config.theme);
        let mut app = Self {
            options,
            config,
            theme,
            views: Vec::new(),
            active: 0,
            last_error: None,
            should_quit: false,
            battery: BatteryWidget::new(),
            charge: ChargeGauge::new(),
            power: PowerGauge::new(),
            health: HealthGauge::new(),
            help: HelpWidget::new(),
        };
        app.apply_readings(batteries);
        app
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Poll interval in effect: the command-line value wins over the file.
    pub fn interval(&self) -> Duration {
        self.options
            .interval_override
            .unwrap_or_else(|| Duration::from_millis(self.config.global.interval_ms))
    }

    pub fn units(&self) -> Units {
        self.options.units_override.unwrap_or(self.config.global.units)
    }

    pub fn views(&self) -> &[BatteryView] {
        &self.views
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ── Update ────────────────────────────────────────────────────────────────

    pub fn update(&mut self, msg: Message) -> Effect {
        match msg {
            Message::BatteryUpdate(batteries) => {
                self.apply_readings(batteries);
                self.last_error = None;
            }
            Message::BatteryError(e) => {
                self.last_error = Some(e);
            }
            Message::ConfigReloaded => return self.reload_config(),
            Message::NextTab => self.step_tab(1),
            Message::PreviousTab => self.step_tab(-1),
            Message::Resize(cols, rows) => {
                debug!(cols, rows, "Terminal resized");
            }
            Message::Shutdown => {
                info!("Shutdown requested");
                self.should_quit = true;
            }
        }
        Effect::None
    }

    fn apply_readings(&mut self, batteries: Vec<BatteryInfo>) {
        for info in batteries {
            match self.views.iter().position(|v| v.name() == info.name) {
                Some(idx) => self.views[idx].update(info),
                None => {
                    info!("Tracking battery {}", info.name);
                    let mut view = BatteryView::new(info.name.clone(), &self.config.charts);
                    view.update(info);
                    self.views.push(view);
                }
            }
        }
    }

    fn step_tab(&mut self, step: isize) {
        let count = self.views.len();
        if count < 2 {
            return;
        }
        self.active = (self.active as isize + step).rem_euclid(count as isize) as usize;
        debug!(active = self.active, "Switched battery view");
    }

    fn reload_config(&mut self) -> Effect {
        let cfg = match load_config(&self.options.config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Config reload failed: {e}");
                return Effect::None;
            }
        };

        let previous = self.interval();
        self.theme = Theme::from_config(&cfg.theme);
        for view in &mut self.views {
            view.apply_config(&cfg.charts);
        }
        self.config = cfg;
        info!("Config reloaded");

        let interval = self.interval();
        if interval != previous {
            info!("Poll interval changed to {interval:?}");
            Effect::RestartMonitor(interval)
        } else {
            Effect::None
        }
    }

    // ── View text ─────────────────────────────────────────────────────────────

    fn active_view(&self) -> Option<&BatteryView> {
        self.views.get(self.active)
    }

    /// Battery details for the left panel.
    pub fn info_text(&self) -> String {
        match self.active_view().and_then(BatteryView::latest) {
            Some(info) => self.battery.view(info, self.units(), &self.theme),
            None => "[gray]Loading battery information...[-]".to_string(),
        }
    }

    /// Charge, power and health gauge lines, top to bottom.
    pub fn gauge_lines(&self) -> [String; 3] {
        match self.active_view().and_then(BatteryView::latest) {
            Some(info) => [
                self.charge.view(info, &self.theme),
                self.power.view(info, self.units()),
                self.health.view(info, &self.theme),
            ],
            None => [
                " [gray]Loading charge data...[-]".to_string(),
                " [gray]Loading power data...[-]".to_string(),
                " [gray]Loading health data...[-]".to_string(),
            ],
        }
    }

    /// Key hints, followed by the last poll error if there is one.
    pub fn footer_text(&self) -> String {
        let help = self.help.view(self.views.len());
        match &self.last_error {
            Some(e) => format!("{help}  [red]{e}[-]"),
            None => help,
        }
    }

    /// Header plus stacked charts for a `width × height` area.
    pub fn chart_text(&mut self, width: u16, height: u16) -> String {
        if width == 0 || height == 0 {
            return String::new();
        }
        let multi = self.views.len() > 1;
        let active = self.active;
        let count = self.views.len();
        let Some(view) = self.views.get_mut(active) else {
            return String::new();
        };

        let title = if multi {
            format!(" Real-time Monitoring: {} ({}/{count}) ", view.name(), active + 1)
        } else {
            MONITORING_TITLE.to_string()
        };

        let mut out = String::new();
        let cols = usize::from(width);
        let title_len = title.chars().count();
        if cols > title_len {
            let left = (cols - title_len) / 2;
            out.push_str(&format!(
                "[white::b]{}{title}{}[-]\n",
                "─".repeat(left),
                "─".repeat(cols - left - title_len)
            ));
        }
        out.push_str(&view.render_charts(i32::from(width), i32::from(height) - 1));
        out
    }
}
