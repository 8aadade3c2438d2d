//! Pie charts.

use super::{PieChart, PieData};
use crate::models::{PlotArea, non_empty};
use crate::util::dynamic_round;

/// One record per wedge: label, sweep in degrees and radius.
pub fn extract_pie(area: &PlotArea) -> PieChart {
    PieChart {
        title: non_empty(&area.title),
        elements: area
            .wedges()
            .map(|wedge| PieData {
                label: wedge.label.clone(),
                angle: dynamic_round(wedge.theta2 - wedge.theta1).abs(),
                radius: wedge.r,
            })
            .collect(),
    }
}
