//! Entry points: figure -> chart.
//!
//! ```
//! use figure_charts::models::{Artist, Figure, Line2D, PlotArea};
//! use figure_charts::{Chart, chart_from_figure};
//!
//! let figure = Figure::new().with_plot_area(
//!     PlotArea::new()
//!         .with_title("Squares")
//!         .with_artist(Artist::Line(Line2D::new("_child0", [0.0, 1.0, 2.0], [0.0, 1.0, 4.0]))),
//! );
//! let chart = chart_from_figure(&figure)?.expect("one plot area");
//! let Chart::Line(line) = chart else { panic!("expected a line chart") };
//! assert_eq!(line.elements[0].label, "Line 0");
//! # Ok::<(), figure_charts::ExtractError>(())
//! ```

use crate::charts::{
    Chart, ChartKind, CompositeChart, UnknownChart, bars, boxes, pie, planar,
};
use crate::classify::classify;
use crate::error::Result;
use crate::models::{Figure, PlotArea, non_empty};
use log::{debug, warn};

/// Extract the chart drawn on a single plot area.
///
/// # Errors
/// Geometry that cannot be interpreted at all (see [`crate::ExtractError`]).
pub fn chart_from_plot_area(area: &PlotArea) -> Result<Chart> {
    let kind = classify(area);
    debug!(
        "plot area `{}`: {} artists classified as {kind}",
        area.title,
        area.artists.len()
    );
    Ok(match kind {
        ChartKind::Line => Chart::Line(planar::extract_line(area)?),
        ChartKind::Scatter => Chart::Scatter(planar::extract_scatter(area)),
        ChartKind::Bar => Chart::Bar(bars::extract_bar(area)),
        ChartKind::Pie => Chart::Pie(pie::extract_pie(area)),
        ChartKind::BoxAndWhisker => Chart::BoxAndWhisker(boxes::extract_box_and_whisker(area)?),
        ChartKind::Composite | ChartKind::Unknown => {
            Chart::Unknown(UnknownChart::from_plot_area(area))
        }
    })
}

/// Extract the chart of a whole figure.
///
/// - no plot areas: `Ok(None)`
/// - one plot area: that area's chart
/// - several: a [`CompositeChart`] titled by the figure caption
///
/// # Errors
/// Only for single-panel figures; panels of a composite never fail.
pub fn chart_from_figure(figure: &Figure) -> Result<Option<Chart>> {
    match figure.axes.as_slice() {
        [] => Ok(None),
        [area] => chart_from_plot_area(area).map(Some),
        _ => Ok(Some(Chart::Composite(CompositeChart::from_figure(figure)))),
    }
}

/// JSON form of [`chart_from_figure`]; `{}` when the figure has no chart.
pub fn figure_to_value(figure: &Figure) -> Result<serde_json::Value> {
    Ok(match chart_from_figure(figure)? {
        Some(chart) => serde_json::to_value(chart)?,
        None => serde_json::Value::Object(serde_json::Map::new()),
    })
}

impl CompositeChart {
    /// Extract every panel on its own. A panel that fails is kept as an
    /// `unknown` chart with its title so the other panels survive.
    pub fn from_figure(figure: &Figure) -> Self {
        let elements = figure
            .axes
            .iter()
            .enumerate()
            .map(|(index, area)| {
                chart_from_plot_area(area).unwrap_or_else(|e| {
                    warn!("panel {index} (`{}`) skipped: {e}", area.title);
                    Chart::Unknown(UnknownChart::from_plot_area(area))
                })
            })
            .collect();
        Self {
            title: non_empty(&figure.suptitle),
            elements,
        }
    }
}
