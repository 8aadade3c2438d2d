//! Box-and-whisker charts, reconstructed from the drawn geometry.
//!
//! Statistics are read back from where things were drawn, never recomputed:
//! the box body gives both quartiles, a horizontal segment inside the body is
//! the median, segments hanging off the bottom/top edge are the whiskers and
//! single points over a box are its outliers.
//!
//! All coordinates go through [`dynamic_round`] so that whisker endpoints and
//! box edges compare equal exactly.

use super::{AxisLabels, BoxAndWhiskerChart, BoxData};
use crate::error::{ExtractError, Result};
use crate::models::{DataValue, Line2D, PlotArea, non_empty};
use crate::util::dynamic_round;
use log::{debug, warn};

/// Body of one box plus what the segments told us about it.
#[derive(Debug, Clone, PartialEq)]
struct BoxGeometry {
    label: String,
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    median: Option<f64>,
    lower_whisker: Option<f64>,
    upper_whisker: Option<f64>,
    outliers: Vec<f64>,
}

impl BoxGeometry {
    fn height(&self) -> f64 {
        self.top - self.bottom
    }

    fn transposed(self) -> Self {
        Self {
            left: self.bottom,
            right: self.top,
            bottom: self.left,
            top: self.right,
            ..self
        }
    }

    fn spans_x(&self, x: f64) -> bool {
        self.left <= x && x <= self.right
    }

    fn spans_y(&self, y: f64) -> bool {
        self.bottom <= y && y <= self.top
    }

    /// Attach one rendered segment to this box.
    fn absorb_segment(&mut self, y0: f64, y1: f64) {
        if y0 == y1 && self.spans_y(y0) {
            self.median = Some(y0);
            return;
        }
        let (lower, upper) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        if upper == self.bottom {
            self.lower_whisker = Some(lower);
        } else if lower == self.top {
            self.upper_whisker = Some(upper);
        }
    }

    fn finish(self) -> Result<BoxData> {
        let median = self.median.ok_or_else(|| ExtractError::MissingMedian {
            label: self.label.clone(),
        })?;
        let min = self.lower_whisker.unwrap_or_else(|| {
            debug!("box `{}`: no lower whisker, using first quartile", self.label);
            self.bottom
        });
        let max = self.upper_whisker.unwrap_or_else(|| {
            debug!("box `{}`: no upper whisker, using third quartile", self.label);
            self.top
        });
        Ok(BoxData {
            label: self.label,
            min,
            first_quartile: self.bottom,
            median,
            third_quartile: self.top,
            max,
            outliers: self.outliers,
        })
    }
}

/// Rebuild box statistics from box patches and line segments.
///
/// Boxes are paired positionally with the x tick labels. When the boxes are
/// lying on their side (see `is_sideways`) labels, units and all coordinates
/// are transposed before the segments are matched.
///
/// # Errors
/// - a box patch without vertices
/// - a box without a median line
pub fn extract_box_and_whisker(area: &PlotArea) -> Result<BoxAndWhiskerChart> {
    let mut boxes = area
        .x_axis
        .tick_labels
        .iter()
        .zip(area.path_patches())
        .enumerate()
        .map(|(index, (label, patch))| -> Result<BoxGeometry> {
            let xs = patch.vertices.iter().map(|v| dynamic_round(v.0));
            let ys = patch.vertices.iter().map(|v| dynamic_round(v.1));
            let (left, right) = min_max(xs).ok_or(ExtractError::EmptyGeometry { index })?;
            let (bottom, top) = min_max(ys).ok_or(ExtractError::EmptyGeometry { index })?;
            Ok(BoxGeometry {
                label: label.clone(),
                left,
                right,
                bottom,
                top,
                median: None,
                lower_whisker: None,
                upper_whisker: None,
                outliers: Vec::new(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut labels = AxisLabels::from_plot_area(area);
    let sideways = is_sideways(&boxes, area);
    if sideways {
        debug!("box plot: uniform box heights, transposing axes");
        labels = labels.swapped();
        boxes = boxes.into_iter().map(BoxGeometry::transposed).collect();
    }

    for line in area.lines() {
        let Some((xs, ys)) = rounded_coordinates(line, sideways) else {
            continue;
        };
        attach_line(&mut boxes, &xs, &ys);
    }

    Ok(BoxAndWhiskerChart {
        title: non_empty(&area.title),
        labels,
        elements: boxes
            .into_iter()
            .map(BoxGeometry::finish)
            .collect::<Result<_>>()?,
    })
}

/// Boxes lie on their side when all of them have the same height.
///
/// A single box always has "the same height", so there the median decides: a
/// sideways box has a vertical segment spanning its whole body. The median may
/// sit on a quartile edge.
fn is_sideways(boxes: &[BoxGeometry], area: &PlotArea) -> bool {
    match boxes {
        [] => false,
        [only] => area
            .lines()
            .filter_map(|line| Some((round_all(&line.xdata)?, round_all(&line.ydata)?)))
            .any(|(xs, ys)| match (xs.as_slice(), ys.as_slice()) {
                ([x0, x1], [y0, y1]) => {
                    x0 == x1
                        && only.left <= *x0
                        && *x0 <= only.right
                        && y0.min(*y1) == only.bottom
                        && y0.max(*y1) == only.top
                }
                _ => false,
            }),
        [first, rest @ ..] => rest.iter().all(|b| b.height() == first.height()),
    }
}

/// Outlier markers are single points; medians and whiskers are two-point
/// segments lying within a box's horizontal span.
fn attach_line(boxes: &mut [BoxGeometry], xs: &[f64], ys: &[f64]) {
    if let ([x], [y, ..]) = (xs, ys) {
        if let Some(b) = boxes.iter_mut().find(|b| b.spans_x(*x)) {
            b.outliers.push(*y);
        }
    }

    let ([x0, x1], [y0, y1]) = (xs, ys) else {
        return;
    };
    if let Some(b) = boxes
        .iter_mut()
        .find(|b| b.left <= *x0 && x0 <= x1 && *x1 <= b.right)
    {
        b.absorb_segment(*y0, *y1);
    }
}

/// Rounded numeric coordinates of a line, transposed when `swap` is set.
fn rounded_coordinates(line: &Line2D, swap: bool) -> Option<(Vec<f64>, Vec<f64>)> {
    let (Some(xs), Some(ys)) = (round_all(&line.xdata), round_all(&line.ydata)) else {
        warn!("box plot: skipping line `{}` with non-numeric coordinates", line.label);
        return None;
    };
    Some(if swap { (ys, xs) } else { (xs, ys) })
}

/// `None` if any value is not numeric.
fn round_all(data: &[DataValue]) -> Option<Vec<f64>> {
    data.iter().map(|v| v.as_f64().map(dynamic_round)).collect()
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
