//! Declarative chart construction.
//!
//! Each operation is a pure function of an [`ExpressionMatrix`] (or a slice
//! of one) producing a serializable spec; no shared state, no caching. The
//! egui layer decides how a spec is drawn. Malformed or empty input yields
//! a reported message, never a panic.
//!
//! [`ExpressionMatrix`]: crate::data::ExpressionMatrix

pub mod bar;
pub mod boxplot;
pub mod heatmap;
pub mod line;
pub mod stats;

pub use bar::{BarChartSpec, bar_chart};
pub use boxplot::{BoxPlotSpec, box_plot};
pub use heatmap::{HeatmapSpec, heatmap};
pub use line::{LineChartOutcome, LineChartSpec, LineSeries, NO_SELECTION_ADVISORY, line_chart};
pub use stats::BoxStats;
