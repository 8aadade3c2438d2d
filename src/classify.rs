//! Chart type detection from the kinds of primitives on a plot area.

use crate::charts::ChartKind;
use crate::models::{Artist, PlotArea};
use crate::util::is_grid_line;

/// Pick the chart category of a plot area; first matching rule wins.
///
/// 1. only lines: `Line`
/// 2. only path patches and lines: `BoxAndWhisker`
/// 3. ignoring grid lines, only point collections: `Scatter`
/// 4. ... only wedges: `Pie`
/// 5. ... only rectangles: `Bar`
///
/// Text is never considered. A plot area with nothing drawn on it, or a mix
/// matching none of the rules, is `Unknown`.
pub fn classify(area: &PlotArea) -> ChartKind {
    let artists: Vec<&Artist> = area.non_text_artists().collect();
    if artists.is_empty() {
        return ChartKind::Unknown;
    }

    if artists.iter().all(|a| matches!(a, Artist::Line(_))) {
        return ChartKind::Line;
    }

    if artists
        .iter()
        .all(|a| matches!(a, Artist::PathPatch(_) | Artist::Line(_)))
    {
        return ChartKind::BoxAndWhisker;
    }

    let data: Vec<&Artist> = artists
        .into_iter()
        .filter(|a| !matches!(a, Artist::Line(line) if is_grid_line(line)))
        .collect();

    if data.iter().all(|a| matches!(a, Artist::PointCollection(_))) {
        ChartKind::Scatter
    } else if data.iter().all(|a| matches!(a, Artist::Wedge(_))) {
        ChartKind::Pie
    } else if data.iter().all(|a| matches!(a, Artist::Rectangle(_))) {
        ChartKind::Bar
    } else {
        ChartKind::Unknown
    }
}
