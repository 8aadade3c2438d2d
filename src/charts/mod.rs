//! Structured chart records and the per-category extractors that build them.
//!
//! - Line / scatter: one [`SeriesData`] per rendered line or point collection
//! - Bar: one [`BarData`] per bar, tagged with its group
//! - Pie: one [`PieData`] per wedge
//! - Box-and-whisker: one [`BoxData`] per box, statistics read back from geometry
//! - Composite: one chart per panel of a multi-panel figure

pub mod bars;
pub mod boxes;
pub mod labels;
pub mod pie;
pub mod planar;

pub use labels::AxisLabels;

use crate::models::{PlotArea, Scalar, non_empty};
use crate::scale::ScaleKind;
use serde::{Deserialize, Serialize};

/// Chart categories recognized by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Scatter,
    Bar,
    Pie,
    BoxAndWhisker,
    Composite,
    Unknown,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::BoxAndWhisker => "box_and_whisker",
            ChartKind::Composite => "composite",
            ChartKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chart reconstructed from one plot area (or a whole multi-panel figure).
///
/// Serialized with a `"type"` discriminator holding the [`ChartKind`] name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Chart {
    Line(PointChart),
    Scatter(PointChart),
    Bar(BarChart),
    Pie(PieChart),
    BoxAndWhisker(BoxAndWhiskerChart),
    Composite(CompositeChart),
    Unknown(UnknownChart),
}

impl Chart {
    pub fn kind(&self) -> ChartKind {
        match self {
            Chart::Line(_) => ChartKind::Line,
            Chart::Scatter(_) => ChartKind::Scatter,
            Chart::Bar(_) => ChartKind::Bar,
            Chart::Pie(_) => ChartKind::Pie,
            Chart::BoxAndWhisker(_) => ChartKind::BoxAndWhisker,
            Chart::Composite(_) => ChartKind::Composite,
            Chart::Unknown(_) => ChartKind::Unknown,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Chart::Line(c) | Chart::Scatter(c) => c.title.as_deref(),
            Chart::Bar(c) => c.title.as_deref(),
            Chart::Pie(c) => c.title.as_deref(),
            Chart::BoxAndWhisker(c) => c.title.as_deref(),
            Chart::Composite(c) => c.title.as_deref(),
            Chart::Unknown(c) => c.title.as_deref(),
        }
    }

    /// Axis labels and units; `None` for charts without axes.
    pub fn axis_labels(&self) -> Option<&AxisLabels> {
        match self {
            Chart::Line(c) | Chart::Scatter(c) => Some(&c.labels),
            Chart::Bar(c) => Some(&c.labels),
            Chart::BoxAndWhisker(c) => Some(&c.labels),
            Chart::Pie(_) | Chart::Composite(_) | Chart::Unknown(_) => None,
        }
    }

    /// Number of element records.
    pub fn len(&self) -> usize {
        match self {
            Chart::Line(c) | Chart::Scatter(c) => c.elements.len(),
            Chart::Bar(c) => c.elements.len(),
            Chart::Pie(c) => c.elements.len(),
            Chart::BoxAndWhisker(c) => c.elements.len(),
            Chart::Composite(c) => c.elements.len(),
            Chart::Unknown(c) => c.elements.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One labeled sequence of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub label: String,
    /// `(x, y)` pairs; calendar coordinates are ISO-8601 strings.
    pub points: Vec<(Scalar, Scalar)>,
}

/// Line and scatter charts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointChart {
    pub title: Option<String>,
    #[serde(flatten)]
    pub labels: AxisLabels,
    #[serde(default)]
    pub x_ticks: Vec<Scalar>,
    #[serde(default)]
    pub x_tick_labels: Vec<String>,
    #[serde(default)]
    pub x_scale: ScaleKind,
    #[serde(default)]
    pub y_ticks: Vec<Scalar>,
    #[serde(default)]
    pub y_tick_labels: Vec<String>,
    #[serde(default)]
    pub y_scale: ScaleKind,
    #[serde(default)]
    pub elements: Vec<SeriesData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    /// Category.
    pub label: String,
    /// Series the bar belongs to.
    pub group: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarChart {
    pub title: Option<String>,
    #[serde(flatten)]
    pub labels: AxisLabels,
    #[serde(default)]
    pub elements: Vec<BarData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieData {
    pub label: String,
    /// Sweep in degrees, never negative.
    pub angle: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PieChart {
    pub title: Option<String>,
    #[serde(default)]
    pub elements: Vec<PieData>,
}

/// Five-number summary plus outliers of one box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxData {
    pub label: String,
    pub min: f64,
    pub first_quartile: f64,
    pub median: f64,
    pub third_quartile: f64,
    pub max: f64,
    #[serde(default)]
    pub outliers: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxAndWhiskerChart {
    pub title: Option<String>,
    #[serde(flatten)]
    pub labels: AxisLabels,
    #[serde(default)]
    pub elements: Vec<BoxData>,
}

/// Multi-panel figure: one chart per plot area, in figure order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompositeChart {
    pub title: Option<String>,
    #[serde(default)]
    pub elements: Vec<Chart>,
}

/// Plot area whose primitives match no known category. Elements stay empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnknownChart {
    pub title: Option<String>,
    #[serde(default)]
    pub elements: Vec<serde_json::Value>,
}

impl UnknownChart {
    pub fn from_plot_area(area: &PlotArea) -> Self {
        Self {
            title: non_empty(&area.title),
            elements: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_kind_names() {
        assert_eq!(ChartKind::BoxAndWhisker.to_string(), "box_and_whisker");
        assert_eq!(
            serde_json::to_string(&ChartKind::Composite).unwrap(),
            r#""composite""#
        );
    }

    #[test]
    fn unknown_chart_serializes_type_and_empty_elements() {
        let chart = Chart::Unknown(UnknownChart {
            title: Some("Circles".into()),
            elements: Vec::new(),
        });
        let v = serde_json::to_value(&chart).unwrap();
        assert_eq!(v["type"], "unknown");
        assert_eq!(v["title"], "Circles");
        assert_eq!(v["elements"], serde_json::json!([]));
        assert!(chart.is_empty());
        assert!(chart.axis_labels().is_none());
    }

    #[test]
    fn bar_chart_flattens_axis_labels() {
        let chart = Chart::Bar(BarChart {
            title: None,
            labels: AxisLabels {
                x_label: Some("Time (s)".into()),
                x_unit: Some("s".into()),
                ..AxisLabels::default()
            },
            elements: vec![BarData {
                label: "a".into(),
                group: "g".into(),
                value: 1.0,
            }],
        });
        let v = serde_json::to_value(&chart).unwrap();
        assert_eq!(v["x_label"], "Time (s)");
        assert_eq!(v["x_unit"], "s");
        assert!(v["y_label"].is_null());
        assert!(v["title"].is_null());
    }
}
