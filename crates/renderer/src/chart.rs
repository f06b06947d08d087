use crate::buffer::{SampleBuffer, VisibleRange};
use crate::format::{axis_label, row_value, time_labels, title_banner, x_axis, Y_AXIS_GUTTER};
use crate::grid::{Glyph, Grid};
use battop_theme::{paint, ColorTag};
use chrono::{DateTime, Local};

/// Rows taken by the title, x-axis, time labels and one spare row.
pub const HEIGHT_RESERVE: usize = 4;

/// Plot rows drawn even when the chart is shorter than the reserve.
pub const MIN_PLOT_HEIGHT: usize = 3;

/// Ranges narrower than this are treated as flat.
pub const FLAT_EPSILON: f64 = 0.001;

/// Half-height added around flat data.
pub const FLAT_PADDING: f64 = 0.5;

/// Fraction of the observed range added above and below.
pub const RANGE_PADDING: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Scale {
    Auto,
    Manual { min: f64, max: f64 },
}

/// A titled time-series chart over one bounded sample buffer.
///
/// [`render`](Chart::render) is a pure function of the buffered samples, the
/// last size set with [`set_size`](Chart::set_size) and the scale mode.
#[derive(Debug, Clone)]
pub struct Chart {
    title: String,
    unit: String,
    color: ColorTag,
    buffer: SampleBuffer,
    width: i32,
    height: i32,
    scale: Scale,
}

impl Chart {
    pub fn new(
        title: impl Into<String>,
        unit: impl Into<String>,
        color: ColorTag,
        capacity: usize,
    ) -> Self {
        Self {
            title: title.into(),
            unit: unit.into(),
            color,
            buffer: SampleBuffer::new(capacity),
            width: 0,
            height: 0,
            scale: Scale::Auto,
        }
    }

    pub fn add_value(&mut self, value: f64) {
        self.buffer.push(value);
    }

    pub fn add_value_at(&mut self, value: f64, timestamp: DateTime<Local>) {
        self.buffer.push_at(value, timestamp);
    }

    /// Record the render target. Non-positive sizes render a placeholder.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    /// Use fixed bounds instead of deriving them from the data.
    pub fn set_scale(&mut self, min: f64, max: f64) {
        self.scale = Scale::Manual { min, max };
    }

    /// Go back to deriving bounds from the data.
    pub fn set_auto_scale(&mut self) {
        self.scale = Scale::Auto;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
    }

    pub fn set_color(&mut self, color: ColorTag) {
        self.color = color;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn color(&self) -> ColorTag {
        self.color
    }

    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn is_auto_scale(&self) -> bool {
        self.scale == Scale::Auto
    }

    /// Number of plot rows for the current height.
    pub fn plot_height(&self) -> usize {
        usize::try_from(self.height)
            .unwrap_or(0)
            .saturating_sub(HEIGHT_RESERVE)
            .max(MIN_PLOT_HEIGHT)
    }

    /// Number of plot columns for the current width.
    pub fn plot_width(&self) -> usize {
        usize::try_from(self.width)
            .unwrap_or(0)
            .saturating_sub(Y_AXIS_GUTTER)
    }

    /// Samples that fit in the plot, newest last.
    pub fn visible_range(&self) -> VisibleRange {
        self.buffer.visible(self.plot_width())
    }

    /// `(min, max)` the y-axis spans on the next render.
    pub fn bounds(&self) -> (f64, f64) {
        match self.scale {
            // Reversed bounds are kept; `value_to_row` centers every sample then.
            Scale::Manual { min, max } if (max - min).abs() < FLAT_EPSILON => {
                (min - FLAT_PADDING, max + FLAT_PADDING)
            }
            Scale::Manual { min, max } => (min, max),
            Scale::Auto => {
                let (lo, hi) = self
                    .buffer
                    .values()
                    .filter(|v| v.is_finite())
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                        (lo.min(v), hi.max(v))
                    });
                if lo > hi {
                    // Nothing finite buffered.
                    return (-FLAT_PADDING, FLAT_PADDING);
                }
                if hi - lo < FLAT_EPSILON {
                    widen_if_flat(lo, hi)
                } else {
                    let pad = (hi - lo) * RANGE_PADDING;
                    (lo - pad, hi + pad)
                }
            }
        }
    }

    /// Render the chart as marked-up text, one line per terminal row.
    pub fn render(&self) -> String {
        tracing::trace!(
            title = %self.title,
            width = self.width,
            height = self.height,
            samples = self.buffer.len(),
            "Chart::render"
        );

        if self.width <= 0 || self.height <= 0 {
            return " [gray]Initializing...[-]".to_string();
        }
        if self.buffer.is_empty() {
            return self.render_empty();
        }

        let (min, max) = self.bounds();
        let rows = self.plot_height();
        let cols = self.plot_width();
        let range = self.visible_range();
        let grid = self.build_grid(min, max, rows, range);

        let mut lines = Vec::with_capacity(rows + 3);
        lines.push(title_banner(&self.title, self.width_cols(), self.color));
        for row in 0..rows {
            let label = axis_label(row_value(row, rows, min, max), &self.unit);
            lines.push(format!("{label}{}", paint(self.color, grid.row_text(row))));
        }
        lines.push(x_axis(cols));

        if let Some(newest) = range.newest() {
            let oldest = self.buffer.get(range.start).map(|s| s.timestamp);
            let latest = self.buffer.get(newest).map(|s| s.timestamp);
            if let (Some(oldest), Some(latest)) = (oldest, latest) {
                let newest_label = (range.len() > 1).then_some(latest);
                lines.push(time_labels(oldest, newest_label, cols));
            }
        }

        lines.join("\n")
    }

    fn render_empty(&self) -> String {
        let (min, max) = default_range(&self.unit);
        let rows = self.plot_height();
        let cols = self.plot_width();

        let mut lines = Vec::with_capacity(rows + 3);
        lines.push(title_banner(&self.title, self.width_cols(), self.color));
        for row in 0..rows {
            let label = axis_label(row_value(row, rows, min, max), &self.unit);
            lines.push(format!("{label}{}", paint(ColorTag::Gray, "·".repeat(cols))));
        }
        lines.push(x_axis(cols));
        lines.push(format!(
            "[gray]{:width$}Waiting for data...[-]",
            "",
            width = Y_AXIS_GUTTER
        ));
        lines.join("\n")
    }

    /// Plot the visible samples into a fresh grid.
    fn build_grid(&self, min: f64, max: f64, rows: usize, range: VisibleRange) -> Grid {
        let mut grid = Grid::new(rows, self.plot_width());
        let Some(newest) = range.newest() else {
            return grid;
        };

        let mut prev_row = None;
        for idx in range.start..range.end {
            let row = self.row_at(idx, min, max, rows);
            let col = range.column(idx);
            grid.set(row, col, self.glyph_for(idx, row, newest, min, max, rows));
            if let Some(prev) = prev_row {
                grid.connect(col, prev, row);
            }
            prev_row = Some(row);
        }
        grid
    }

    /// Newest wins over peak/valley, even if the newest sample is an extremum.
    fn glyph_for(
        &self,
        idx: usize,
        row: usize,
        newest: usize,
        min: f64,
        max: f64,
        rows: usize,
    ) -> Glyph {
        if idx == newest {
            return Glyph::Current;
        }
        if idx > 0 && idx + 1 < self.buffer.len() {
            let prev = self.row_at(idx - 1, min, max, rows);
            let next = self.row_at(idx + 1, min, max, rows);
            if row < prev && row < next {
                return Glyph::Peak;
            }
            if row > prev && row > next {
                return Glyph::Valley;
            }
        }
        Glyph::Point
    }

    fn row_at(&self, idx: usize, min: f64, max: f64, rows: usize) -> usize {
        let value = self.buffer.get(idx).map_or(min, |s| s.value);
        value_to_row(value, min, max, rows)
    }

    fn width_cols(&self) -> usize {
        usize::try_from(self.width).unwrap_or(0)
    }
}

/// Map `value` onto `rows` rows, largest value on row 0, clamped to the grid.
pub fn value_to_row(value: f64, min: f64, max: f64, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    if max <= min || !value.is_finite() {
        return rows / 2;
    }
    let normalized = (value - min) / (max - min);
    // `as` truncates toward zero and saturates, like the clamp below expects.
    let row = ((rows - 1) as f64 * (1.0 - normalized)) as i64;
    row.clamp(0, rows as i64 - 1) as usize
}

/// Axis range shown before any data arrives, chosen by unit.
pub fn default_range(unit: &str) -> (f64, f64) {
    match unit {
        "V" => (0.0, 20.0),
        "W" => (-20.0, 20.0),
        _ => (0.0, 100.0),
    }
}

fn widen_if_flat(lo: f64, hi: f64) -> (f64, f64) {
    if hi - lo < FLAT_EPSILON {
        (lo - FLAT_PADDING, hi + FLAT_PADDING)
    } else {
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn chart_with(values: &[f64], width: i32, height: i32) -> Chart {
        let mut chart = Chart::new("Test", "", ColorTag::White, 120);
        chart.set_size(width, height);
        let t0 = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        for (i, v) in values.iter().enumerate() {
            chart.add_value_at(*v, t0 + TimeDelta::seconds(i as i64));
        }
        chart
    }

    fn grid_of(chart: &Chart) -> Grid {
        let (min, max) = chart.bounds();
        chart.build_grid(min, max, chart.plot_height(), chart.visible_range())
    }

    #[test]
    fn peak_and_current_glyphs() {
        // height 7 leaves a 3-row plot.
        let chart = chart_with(&[1.0, 5.0, 1.0], 30, 7);
        assert_eq!(chart.plot_height(), 3);
        let grid = grid_of(&chart);
        assert_eq!(grid.get(1, 0), Some(Glyph::Point));
        assert_eq!(grid.get(0, 1), Some(Glyph::Peak));
        assert_eq!(grid.get(1, 2), Some(Glyph::Current));
    }

    #[test]
    fn newest_sample_is_never_a_valley() {
        let chart = chart_with(&[5.0, 1.0, 5.0, 1.0], 30, 7);
        let grid = grid_of(&chart);
        assert_eq!(grid.get(1, 1), Some(Glyph::Valley));
        assert_eq!(grid.get(0, 2), Some(Glyph::Peak));
        assert_eq!(grid.get(1, 3), Some(Glyph::Current));
    }

    #[test]
    fn vertical_connectors_fill_between_samples() {
        // 6 rows: 0.0 maps to row 4 and 10.0 to row 0.
        let chart = chart_with(&[0.0, 10.0], 30, 10);
        let grid = grid_of(&chart);
        assert_eq!(grid.get(4, 0), Some(Glyph::Point));
        assert_eq!(grid.get(0, 1), Some(Glyph::Current));
        for row in 1..4 {
            assert_eq!(grid.get(row, 1), Some(Glyph::Connector));
        }
        assert_eq!(grid.get(4, 1), Some(Glyph::Empty));
    }

    #[test]
    fn window_shows_only_newest_samples() {
        let mut chart = Chart::new("Charge", "%", ColorTag::Cyan, 120);
        chart.set_size(51, 20);
        for v in 1..=200i32 {
            chart.add_value(f64::from(v));
        }
        assert_eq!(chart.buffer().len(), 120);
        assert_eq!(chart.plot_width(), 40);

        let range = chart.visible_range();
        assert_eq!(range.len(), 40);
        let shown: Vec<f64> = (range.start..range.end)
            .filter_map(|i| chart.buffer().get(i).map(|s| s.value))
            .collect();
        let expected: Vec<f64> = (161..=200i32).map(f64::from).collect();
        assert_eq!(shown, expected);

        let grid = grid_of(&chart);
        assert!((0..grid.rows()).any(|r| grid.get(r, 39) == Some(Glyph::Current)));
    }

    #[test]
    fn time_labels_follow_the_visible_window() {
        let mut chart = Chart::new("Charge", "%", ColorTag::Cyan, 120);
        chart.set_size(51, 20);
        let t0 = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        for i in 1..=200i64 {
            chart.add_value_at(i as f64, t0 + TimeDelta::seconds(i));
        }

        // Samples 161..=200 are visible: 12:02:41 through 12:03:20.
        let out = chart.render();
        let last = out.lines().last().unwrap();
        let oldest = (t0 + TimeDelta::seconds(161)).format("%H:%M:%S").to_string();
        let newest = (t0 + TimeDelta::seconds(200)).format("%H:%M:%S").to_string();
        assert_eq!(oldest, "12:02:41");
        assert!(last.starts_with(&format!("[gray]{}{oldest}", " ".repeat(11))));
        assert!(last.ends_with(&format!("{newest}[-]")));
        assert!(last.contains("(39s)"));
        assert!(!last.contains("12:01:20"));
    }

    #[test]
    fn flat_data_is_widened() {
        let chart = chart_with(&[7.0, 7.0, 7.0], 40, 12);
        let (min, max) = chart.bounds();
        assert_eq!((min, max), (6.5, 7.5));
        assert!(max - min >= 1.0);

        let single = chart_with(&[3.0], 40, 12);
        let (min, max) = single.bounds();
        assert!(max - min >= 1.0);
    }

    #[test]
    fn bounds_pad_ten_percent() {
        let chart = chart_with(&[0.0, 10.0], 40, 12);
        assert_eq!(chart.bounds(), (-1.0, 11.0));
    }

    #[test]
    fn larger_value_raises_upper_bound() {
        let mut chart = chart_with(&[1.0, 2.0, 3.0], 40, 12);
        let (_, before) = chart.bounds();
        chart.add_value(10.0);
        let (_, after) = chart.bounds();
        assert!(after > before);
    }

    #[test]
    fn manual_scale_is_used_verbatim() {
        let mut chart = chart_with(&[1.0, 2.0], 40, 12);
        chart.set_scale(-20.0, 20.0);
        assert!(!chart.is_auto_scale());
        assert_eq!(chart.bounds(), (-20.0, 20.0));
        chart.add_value(500.0);
        assert_eq!(chart.bounds(), (-20.0, 20.0));

        chart.set_scale(4.0, 4.0);
        assert_eq!(chart.bounds(), (3.5, 4.5));
        chart.set_scale(10.0, 0.0);
        assert_eq!(chart.bounds(), (10.0, 0.0));

        chart.set_auto_scale();
        assert!(chart.is_auto_scale());
    }

    #[test]
    fn reversed_manual_scale_centers_samples() {
        let mut chart = chart_with(&[2.0, 8.0], 40, 9);
        chart.set_scale(10.0, 0.0);
        assert_eq!(chart.bounds(), (10.0, 0.0));

        let rows = chart.plot_height();
        let grid = grid_of(&chart);
        assert_eq!(grid.get(rows / 2, 0), Some(Glyph::Point));
        assert_eq!(grid.get(rows / 2, 1), Some(Glyph::Current));

        let out = chart.render();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("[gray]   0.000 ┤[-] "));
        assert!(lines[rows].starts_with("[gray]    10.0 ┤[-] "));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(value_to_row(100.0, 0.0, 10.0, 5), 0);
        assert_eq!(value_to_row(-100.0, 0.0, 10.0, 5), 4);
        assert_eq!(value_to_row(5.0, 3.0, 3.0, 5), 2);
        assert_eq!(value_to_row(f64::NAN, 0.0, 10.0, 5), 2);
    }

    #[test]
    fn non_positive_size_renders_placeholder() {
        for (w, h) in [(0, 20), (80, 0), (-5, -5)] {
            let chart = chart_with(&[1.0, 2.0], w, h);
            let out = chart.render();
            assert!(!out.is_empty());
            assert!(out.contains("Initializing"));
        }
    }

    #[test]
    fn empty_buffer_renders_waiting_placeholder() {
        let mut volts = Chart::new("Voltage", "V", ColorTag::Yellow, 120);
        volts.set_size(40, 9);
        let out = volts.render();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("[yellow:b] Voltage [-]"));
        assert!(lines[1].contains("20.0V ┤"));
        assert!(lines[5].contains("0.000V ┤"));
        assert!(lines[1].contains(&"·".repeat(29)));
        assert!(lines.last().unwrap().contains("Waiting for data..."));

        let mut power = Chart::new("Power", "W", ColorTag::Green, 120);
        power.set_size(40, 9);
        assert!(power.render().contains("-20.0W ┤"));
    }

    #[test]
    fn render_layout() {
        let chart = chart_with(&[3.0, 4.0, 5.0], 40, 12);
        let out = chart.render();
        let lines: Vec<&str> = out.lines().collect();

        // Banner, 8 plot rows, x-axis, time labels.
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with('─'));
        assert!(lines[0].contains("[white:b] Test [-]"));
        assert!(lines[1].starts_with("[gray]    5.20 ┤[-] [white]"));
        assert!(lines[8].starts_with("[gray]    2.80 ┤[-] [white]"));
        assert!(lines[9].contains('└'));
        assert!(lines[10].contains("12:00:00"));
        assert!(lines[10].contains("12:00:02"));
        assert!(lines[10].contains("(2s)"));
        assert!(out.contains('*'));
    }

    #[test]
    fn render_is_idempotent() {
        let chart = chart_with(&[1.0, 4.0, 2.0, 8.0, 5.0], 60, 15);
        assert_eq!(chart.render(), chart.render());
    }

    #[test]
    fn tiny_frames_still_render() {
        let chart = chart_with(&[1.0, 2.0, 3.0], 5, 2);
        assert_eq!(chart.plot_height(), MIN_PLOT_HEIGHT);
        assert_eq!(chart.plot_width(), 0);
        // No columns means no visible samples, so no time labels either.
        let out = chart.render();
        assert_eq!(out.lines().count(), MIN_PLOT_HEIGHT + 2);
    }
}
