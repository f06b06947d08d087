//! Time-series chart engine.
//!
//! Turns bounded sample buffers into fixed-size blocks of text annotated with
//! inline `[color]...[-]` markers. Nothing here reads input or touches the
//! terminal; the caller decides where the text goes.
//!
//! ```
//! use battop_renderer::{Chart, ChartSet};
//! use battop_theme::ColorTag;
//!
//! let mut set = ChartSet::new();
//! set.add_chart(Chart::new("Voltage", "V", ColorTag::Yellow, 120));
//! set.add_chart(Chart::new("Charge", "%", ColorTag::Cyan, 120));
//!
//! if let Some(chart) = set.chart_mut(0) {
//!     chart.add_value(12.4);
//! }
//! set.set_size(80, 24);
//! assert!(set.render().contains("Voltage"));
//! ```

pub mod buffer;
pub mod chart;
pub mod chart_set;
pub mod format;
pub mod grid;

pub use buffer::{Sample, SampleBuffer, VisibleRange};
pub use chart::{default_range, value_to_row, Chart};
pub use chart_set::ChartSet;
pub use format::{format_elapsed, format_value, title_banner};
pub use grid::{Glyph, Grid};
