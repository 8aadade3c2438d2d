//! Bar charts.
//!
//! The renderer does not say which way bars point. Bars of a horizontal bar
//! chart all share the same thickness (their `height`), so a group whose
//! heights are all equal is read from the y-axis categories and the bar widths;
//! otherwise categories come from the x-axis and values from the heights.

use super::{AxisLabels, BarChart, BarData};
use crate::models::{BarContainer, PlotArea, non_empty};
use log::debug;

/// Auto-generated label prefix for unnamed bar groups (`_container1`).
const AUTO_GROUP_PREFIX: &str = "_container";

pub fn extract_bar(area: &PlotArea) -> BarChart {
    let mut elements = Vec::new();
    let mut swap_axes = false;

    for container in &area.containers {
        let group = group_label(&container.label);
        let (categories, values) = if has_uniform_height(container) {
            debug!("bar group `{group}`: uniform heights, reading values from widths");
            swap_axes = true;
            (
                &area.y_axis.tick_labels,
                container.bars.iter().map(|b| b.width).collect::<Vec<_>>(),
            )
        } else {
            (
                &area.x_axis.tick_labels,
                container.bars.iter().map(|b| b.height).collect(),
            )
        };

        elements.extend(categories.iter().zip(values).map(|(label, value)| BarData {
            label: label.clone(),
            group: group.clone(),
            value,
        }));
    }

    let labels = AxisLabels::from_plot_area(area);
    BarChart {
        title: non_empty(&area.title),
        labels: if swap_axes { labels.swapped() } else { labels },
        elements,
    }
}

/// `_container<N>` becomes `Group <N>`; anything else is kept.
pub fn group_label(raw: &str) -> String {
    raw.strip_prefix(AUTO_GROUP_PREFIX)
        .and_then(|n| n.parse::<u64>().ok())
        .map(|n| format!("Group {n}"))
        .unwrap_or_else(|| raw.to_string())
}

fn has_uniform_height(container: &BarContainer) -> bool {
    match container.bars.split_first() {
        Some((first, rest)) => rest.iter().all(|b| b.height == first.height),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_group_labels_are_renamed() {
        assert_eq!(group_label("_container3"), "Group 3");
        assert_eq!(group_label("Books Sold"), "Books Sold");
    }

    #[test]
    fn empty_group_emits_nothing() {
        let area = PlotArea::new().with_bar_container(BarContainer {
            label: "_container0".into(),
            bars: Vec::new(),
        });
        let chart = extract_bar(&area);
        assert!(chart.elements.is_empty());
    }
}
