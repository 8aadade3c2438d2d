//! Line and scatter charts.

use super::{AxisLabels, PointChart, SeriesData};
use crate::error::{ExtractError, Result};
use crate::models::{Line2D, PlotArea, Scalar, non_empty};
use crate::scale::axis_scale;
use crate::util::is_grid_line;

/// Auto-generated label prefix for unnamed lines (`_child3`).
const AUTO_LINE_PREFIX: &str = "_child";

impl PointChart {
    /// Title, labels, ticks and scales of both axes. Elements start empty.
    fn from_plot_area(area: &PlotArea) -> Self {
        let (x_ticks, x_scale) = axis_scale(&area.x_axis);
        let (y_ticks, y_scale) = axis_scale(&area.y_axis);
        Self {
            title: non_empty(&area.title),
            labels: AxisLabels::from_plot_area(area),
            x_ticks,
            x_tick_labels: area.x_axis.tick_labels.clone(),
            x_scale,
            y_ticks,
            y_tick_labels: area.y_axis.tick_labels.clone(),
            y_scale,
            elements: Vec::new(),
        }
    }
}

/// One series per rendered line, grid lines skipped.
///
/// # Errors
/// A line whose x and y arrays differ in length.
pub fn extract_line(area: &PlotArea) -> Result<PointChart> {
    let mut chart = PointChart::from_plot_area(area);
    for line in area.lines() {
        if is_grid_line(line) {
            continue;
        }
        let label = line_label(&line.label);
        let points = zip_line(line, &label)?;
        chart.elements.push(SeriesData { label, points });
    }
    Ok(chart)
}

/// One series per point collection, labels kept verbatim.
pub fn extract_scatter(area: &PlotArea) -> PointChart {
    let mut chart = PointChart::from_plot_area(area);
    chart.elements = area
        .collections()
        .map(|collection| SeriesData {
            label: collection.label.clone(),
            points: collection
                .offsets
                .iter()
                .map(|(x, y)| (x.to_scalar(), y.to_scalar()))
                .collect(),
        })
        .collect();
    chart
}

/// `_child<N>` becomes `Line <N>`; anything else is kept.
pub fn line_label(raw: &str) -> String {
    raw.strip_prefix(AUTO_LINE_PREFIX)
        .and_then(|n| n.parse::<u64>().ok())
        .map(|n| format!("Line {n}"))
        .unwrap_or_else(|| raw.to_string())
}

fn zip_line(line: &Line2D, label: &str) -> Result<Vec<(Scalar, Scalar)>> {
    if line.xdata.len() != line.ydata.len() {
        return Err(ExtractError::MismatchedLengths {
            label: label.to_string(),
            x_len: line.xdata.len(),
            y_len: line.ydata.len(),
        });
    }
    Ok(line
        .xdata
        .iter()
        .zip(&line.ydata)
        .map(|(x, y)| (x.to_scalar(), y.to_scalar()))
        .collect())
}
