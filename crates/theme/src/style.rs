use crate::colors::ColorTag;
use battop_config::ThresholdConfig;

/// One step of a [`Thresholds`] table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub threshold: f64,
    pub color: ColorTag,
}

/// Ordered `{threshold, color}` table mapping a percentage to a color.
///
/// Steps are checked in order; the first with `value >= threshold` wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    steps: Vec<Threshold>,
    fallback: ColorTag,
}

impl Thresholds {
    pub fn new(steps: Vec<Threshold>, fallback: ColorTag) -> Self {
        Self { steps, fallback }
    }

    /// Build from config; steps with unknown color names are skipped.
    pub fn from_config(steps: &[ThresholdConfig], fallback: &str) -> Self {
        let steps = steps
            .iter()
            .filter_map(|s| match ColorTag::from_name(&s.color) {
                Some(color) => Some(Threshold {
                    threshold: s.threshold,
                    color,
                }),
                None => {
                    tracing::warn!("Unknown color '{}' in threshold table; skipped", s.color);
                    None
                }
            })
            .collect();
        let fallback = ColorTag::from_name(fallback).unwrap_or(ColorTag::Red);
        Self { steps, fallback }
    }

    pub fn color_for(&self, value: f64) -> ColorTag {
        self.steps
            .iter()
            .find(|s| value >= s.threshold)
            .map_or(self.fallback, |s| s.color)
    }

    pub fn steps(&self) -> &[Threshold] {
        &self.steps
    }
}
