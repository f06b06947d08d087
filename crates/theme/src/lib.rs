pub mod colors;
pub mod style;

pub use colors::ColorTag;
pub use style::{Threshold, Thresholds};

use battop_config::{ChartConfig, ThemeConfig};

/// Compiled theme derived from [`ThemeConfig`].
///
/// Calling [`Theme::from_config`] is infallible: unknown color names fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Charge gauge colors.
    pub charge: Thresholds,
    /// Health gauge and health readout colors.
    pub health: Thresholds,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            charge: Thresholds::from_config(&cfg.charge_thresholds, &cfg.charge_fallback),
            health: Thresholds::from_config(&cfg.health_thresholds, &cfg.health_fallback),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

/// Resolve a chart's configured color, defaulting to white.
pub fn chart_color(cfg: &ChartConfig) -> ColorTag {
    ColorTag::from_name(&cfg.color).unwrap_or_else(|| {
        tracing::warn!("Unknown color '{}' for chart '{}'", cfg.color, cfg.title);
        ColorTag::White
    })
}

/// Wrap `text` in `[color]...[-]`.
pub fn paint(color: ColorTag, text: impl AsRef<str>) -> String {
    format!("[{color}]{}[-]", text.as_ref())
}

/// Wrap `text` in `[color:b]...[-]` (bold).
pub fn paint_bold(color: ColorTag, text: impl AsRef<str>) -> String {
    format!("[{color}:b]{}[-]", text.as_ref())
}
