//! Text pieces around the plot: banner, axis labels and time labels.

use battop_theme::{paint, paint_bold, ColorTag};
use chrono::{DateTime, Local, TimeDelta};

/// Columns left of the plot: 8 for the label, 3 for `" ┤ "`.
pub const Y_AXIS_GUTTER: usize = 11;

/// Width reserved for a numeric y-axis label.
pub const LABEL_WIDTH: usize = 8;

/// `strftime` format of x-axis timestamps.
pub const TIME_FORMAT: &str = "%H:%M:%S";

const TIME_LABEL_WIDTH: usize = 8;

/// Format a value with precision that shrinks as magnitude grows, suffixed by `unit`.
///
/// | magnitude | decimals |
/// |-----------|----------|
/// | ≥ 1000    | 0        |
/// | ≥ 10      | 1        |
/// | ≥ 1       | 2        |
/// | < 1       | 3        |
///
/// Halves round away from zero, so `1234.5` becomes `"1235"`.
pub fn format_value(value: f64, unit: &str) -> String {
    let magnitude = value.abs();
    let decimals = if magnitude >= 1000.0 {
        0
    } else if magnitude >= 10.0 {
        1
    } else if magnitude >= 1.0 {
        2
    } else {
        3
    };
    let scaled = value * 10f64.powi(decimals);
    let shown = if scaled.round() == 0.0 {
        // Tiny negatives would otherwise print as "-0.000".
        0.0
    } else if (scaled - scaled.trunc()).abs() == 0.5 {
        // The formatter breaks exact ties to even.
        scaled.round() / 10f64.powi(decimals)
    } else {
        value
    };
    format!("{shown:.prec$}{unit}", prec = decimals as usize)
}

/// Compact elapsed time: `"42s"`, `"17m"` or `"2h5m"`. Negative spans count as zero.
pub fn format_elapsed(span: TimeDelta) -> String {
    let secs = span.num_seconds().max(0);
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else {
        format!("{}h{}m", secs / 3600, (secs / 60) % 60)
    }
}

/// Title centered between horizontal rules, `width` columns wide.
///
/// Titles wider than `width` are truncated.
pub fn title_banner(title: &str, width: usize, color: ColorTag) -> String {
    let mut text = format!(" {title} ");
    if text.chars().count() > width {
        text = if width >= 2 {
            let kept: String = title.chars().take(width - 2).collect();
            format!(" {kept} ")
        } else {
            title.chars().take(width).collect()
        };
    }

    let len = text.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!(
        "{}{}{}",
        "─".repeat(left),
        paint_bold(color, &text),
        "─".repeat(right)
    )
}

/// Right-aligned y-axis label followed by the tick and a spacer.
pub fn axis_label(value: f64, unit: &str) -> String {
    format!(
        "[gray]{:>width$} ┤[-] ",
        format_value(value, unit),
        width = LABEL_WIDTH
    )
}

/// Value of plot row `row` when `rows` rows span `[min, max]`, top row = `max`.
pub fn row_value(row: usize, rows: usize, min: f64, max: f64) -> f64 {
    if rows <= 1 {
        return max;
    }
    max - (row as f64 / (rows - 1) as f64) * (max - min)
}

/// Horizontal rule under the plot, starting below the axis tick.
pub fn x_axis(plot_width: usize) -> String {
    format!(
        "[gray]{:width$} └{}[-]",
        "",
        "─".repeat(plot_width + 1),
        width = LABEL_WIDTH
    )
}

/// Timestamps of the oldest and newest visible samples under the plot.
///
/// `newest` is `None` when only one sample is visible. The elapsed time is
/// centered between the two timestamps when the gap can hold it; otherwise
/// the gap is plain spacing.
pub fn time_labels(
    oldest: DateTime<Local>,
    newest: Option<DateTime<Local>>,
    plot_width: usize,
) -> String {
    let mut out = format!("[gray]{:width$}", "", width = Y_AXIS_GUTTER);
    out.push_str(&oldest.format(TIME_FORMAT).to_string());

    if let Some(newest) = newest {
        let gap = plot_width.saturating_sub(2 * TIME_LABEL_WIDTH);
        let elapsed = format!("({})", format_elapsed(newest - oldest));
        let elapsed_len = elapsed.chars().count();

        if gap >= elapsed_len + 2 {
            let left = (gap - elapsed_len) / 2;
            let right = gap - elapsed_len - left;
            out.push_str(&" ".repeat(left));
            out.push_str(&paint(ColorTag::Cyan, &elapsed));
            out.push_str(&" ".repeat(right));
            out.push_str("[gray]");
        } else {
            out.push_str(&" ".repeat(gap.max(1)));
        }
        out.push_str(&newest.format(TIME_FORMAT).to_string());
    }

    out.push_str("[-]");
    out
}
