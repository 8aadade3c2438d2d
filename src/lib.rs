//! figure_charts
//!
//! Reconstructs the semantic content of a rendered chart (series, bars, pie
//! wedges, box-plot statistics, axis scales and units) from a snapshot of the
//! figure's primitives, without knowing how the chart was produced. Pairs with
//! the `figure-charts` CLI.
//!
//! ### Features
//! - Chart type detection: line, scatter, bar, pie, box-and-whisker, unknown
//! - Axis scale inference (linear, log, ..., plus categorical and datetime axes)
//! - Axis units from labels such as `"Time (s)"`
//! - Multi-panel figures become one composite chart
//! - Output as JSON (serde) or long-form CSV
//!
//! ### Example
//! ```no_run
//! use figure_charts::models::Figure;
//!
//! let figure: Figure = serde_json::from_str(&std::fs::read_to_string("figure.json")?)?;
//! if let Some(chart) = figure_charts::chart_from_figure(&figure)? {
//!     println!("{} with {} elements", chart.kind(), chart.len());
//!     figure_charts::storage::save_json(Some(&chart), "chart.json")?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod charts;
pub mod classify;
pub mod error;
pub mod extract;
pub mod models;
pub mod scale;
pub mod storage;
pub mod util;

pub use charts::{Chart, ChartKind};
pub use error::{ExtractError, Result};
pub use extract::{chart_from_figure, chart_from_plot_area, figure_to_value};
pub use models::{Figure, PlotArea};
pub use scale::ScaleKind;
