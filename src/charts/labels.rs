//! Axis labels and the units embedded in them.

use crate::models::{PlotArea, non_empty};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// `"Time (s)"` -> `s`, `"Power [kW]"` -> `kW`. The parenthesized form needs a
/// leading space so that `f(x)` is not read as a unit.
static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s\((.*?)\)|\[(.*?)\]").expect("unit pattern is valid")
});

/// Labels and units of a two-dimensional chart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_unit: Option<String>,
    pub y_unit: Option<String>,
}

impl AxisLabels {
    /// Read both axis labels of a plot area; empty labels count as unset.
    pub fn from_plot_area(area: &PlotArea) -> Self {
        let x_label = non_empty(&area.x_axis.label);
        let y_label = non_empty(&area.y_axis.label);
        Self {
            x_unit: x_label.as_deref().and_then(extract_unit),
            y_unit: y_label.as_deref().and_then(extract_unit),
            x_label,
            y_label,
        }
    }

    /// Same labels with the x and y sides exchanged.
    pub fn swapped(self) -> Self {
        Self {
            x_label: self.y_label,
            y_label: self.x_label,
            x_unit: self.y_unit,
            y_unit: self.x_unit,
        }
    }
}

/// Unit from the first ` (...)` or `[...]` group of a label.
///
/// An empty ` ()` means no unit; an empty `[]` is an empty unit.
pub fn extract_unit(label: &str) -> Option<String> {
    let caps = UNIT_RE.captures(label)?;
    caps.get(1)
        .filter(|m| !m.as_str().is_empty())
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}
