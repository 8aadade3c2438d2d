//! Axis scale inference and tick normalization.
//!
//! Renderers report a scale name per axis, but categorical and date axes are
//! both drawn on a linear scale: categories sit at integer positions `0..n`
//! with custom labels, dates are day numbers behind a date converter. The
//! detector recovers those two cases from the tick positions, tick labels and
//! the axis transform.

use crate::models::{Axis, AxisTransform, Scalar};
use chrono::{DateTime, SecondsFormat};
use log::warn;
use serde::{Deserialize, Serialize};

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// How values are laid out along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    #[default]
    Linear,
    Datetime,
    Categorical,
    Log,
    Symlog,
    Logit,
    Function,
    Functionlog,
    Asinh,
    #[serde(other)]
    Unknown,
}

impl ScaleKind {
    /// Map a renderer scale name. Names outside the known set become `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "linear" => ScaleKind::Linear,
            "datetime" => ScaleKind::Datetime,
            "categorical" => ScaleKind::Categorical,
            "log" => ScaleKind::Log,
            "symlog" => ScaleKind::Symlog,
            "logit" => ScaleKind::Logit,
            "function" => ScaleKind::Function,
            "functionlog" => ScaleKind::Functionlog,
            "asinh" => ScaleKind::Asinh,
            other => {
                warn!("unrecognized axis scale `{other}`");
                ScaleKind::Unknown
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleKind::Linear => "linear",
            ScaleKind::Datetime => "datetime",
            ScaleKind::Categorical => "categorical",
            ScaleKind::Log => "log",
            ScaleKind::Symlog => "symlog",
            ScaleKind::Logit => "logit",
            ScaleKind::Function => "function",
            ScaleKind::Functionlog => "functionlog",
            ScaleKind::Asinh => "asinh",
            ScaleKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infer the scale of one axis.
///
/// `ticks` are the already normalized tick values (see [`extract_ticks`]).
/// 1. a date converter always means `Datetime`;
/// 2. a non-linear reported scale is taken as is;
/// 3. a linear axis whose every tick `i` sits at position `i` with a label other
///    than `"i"` is `Categorical`, anything else stays `Linear`.
pub fn detect_scale(
    transform: AxisTransform,
    scale_name: &str,
    ticks: &[Scalar],
    labels: &[String],
) -> ScaleKind {
    if transform == AxisTransform::Datetime {
        return ScaleKind::Datetime;
    }

    if scale_name != "linear" {
        return ScaleKind::from_name(scale_name);
    }

    let categorical = ticks.iter().zip(labels).enumerate().all(|(i, (tick, label))| {
        tick.as_f64() == Some(i as f64) && *label != i.to_string()
    });
    if categorical {
        ScaleKind::Categorical
    } else {
        ScaleKind::Linear
    }
}

/// Normalize tick positions for output.
///
/// Date axes yield ISO-8601 UTC timestamps; numeric axes yield floats; string
/// ticks (already categorical) pass through.
pub fn extract_ticks(transform: AxisTransform, ticks: &[Scalar]) -> Vec<Scalar> {
    match transform {
        AxisTransform::Datetime => ticks
            .iter()
            .map(|tick| match tick.as_f64().and_then(day_number_to_iso) {
                Some(iso) => Scalar::Text(iso),
                None => tick.clone(),
            })
            .collect(),
        AxisTransform::Numeric => ticks.to_vec(),
    }
}

/// Scale and normalized ticks of an axis in one go.
pub fn axis_scale(axis: &Axis) -> (Vec<Scalar>, ScaleKind) {
    let ticks = extract_ticks(axis.transform, &axis.ticks);
    let scale = detect_scale(axis.transform, &axis.scale, &ticks, &axis.tick_labels);
    (ticks, scale)
}

/// Day number since 1970-01-01 UTC to an ISO-8601 timestamp, microsecond resolution.
///
/// Whole seconds print without a fraction, anything finer with all six digits.
pub fn day_number_to_iso(days: f64) -> Option<String> {
    if !days.is_finite() {
        return None;
    }
    let micros = (days * MICROS_PER_DAY).round();
    if micros.abs() >= i64::MAX as f64 {
        return None;
    }
    let micros = micros as i64;
    let format = if micros % 1_000_000 == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    DateTime::from_timestamp_micros(micros).map(|dt| dt.to_rfc3339_opts(format, false))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(l: &[&str]) -> Vec<String> {
        l.iter().map(|s| s.to_string()).collect()
    }

    fn nums(v: &[f64]) -> Vec<Scalar> {
        v.iter().copied().map(Scalar::Number).collect()
    }

    #[test]
    fn detects_categorical_positions() {
        let s = detect_scale(
            AxisTransform::Numeric,
            "linear",
            &nums(&[0.0, 1.0, 2.0]),
            &labels(&["First", "Second", "Third"]),
        );
        assert_eq!(s, ScaleKind::Categorical);
    }

    #[test]
    fn numeric_labels_stay_linear() {
        let s = detect_scale(
            AxisTransform::Numeric,
            "linear",
            &nums(&[1.0, 2.0, 3.0]),
            &labels(&["1", "2", "3"]),
        );
        assert_eq!(s, ScaleKind::Linear);
    }

    #[test]
    fn matching_label_at_position_zero_breaks_categorical() {
        let s = detect_scale(
            AxisTransform::Numeric,
            "linear",
            &nums(&[0.0, 1.0]),
            &labels(&["0", "b"]),
        );
        assert_eq!(s, ScaleKind::Linear);
    }

    #[test]
    fn reported_scale_wins_over_labels() {
        let s = detect_scale(
            AxisTransform::Numeric,
            "log",
            &nums(&[1.0, 10.0, 100.0]),
            &labels(&["1", "10", "100"]),
        );
        assert_eq!(s, ScaleKind::Log);
        let s = detect_scale(AxisTransform::Numeric, "symlog", &[], &[]);
        assert_eq!(s, ScaleKind::Symlog);
    }

    #[test]
    fn date_transform_always_datetime() {
        let s = detect_scale(
            AxisTransform::Datetime,
            "linear",
            &nums(&[0.0, 1.0, 2.0]),
            &labels(&["1", "2", "3"]),
        );
        assert_eq!(s, ScaleKind::Datetime);
    }

    #[test]
    fn unknown_scale_name() {
        let s = detect_scale(AxisTransform::Numeric, "mercator", &[], &[]);
        assert_eq!(s, ScaleKind::Unknown);
    }

    #[test]
    fn date_ticks_become_iso_strings() {
        let ticks = extract_ticks(AxisTransform::Datetime, &nums(&[19358.0, 19358.5]));
        assert_eq!(
            ticks,
            vec![
                Scalar::Text("2023-01-01T00:00:00+00:00".into()),
                Scalar::Text("2023-01-01T12:00:00+00:00".into()),
            ]
        );
    }

    #[test]
    fn sub_second_ticks_keep_six_digits() {
        // 1/1024 day = 84.375 s
        assert_eq!(
            day_number_to_iso(19358.0 + 1.0 / 1024.0).as_deref(),
            Some("2023-01-01T00:01:24.375000+00:00")
        );
        assert_eq!(
            day_number_to_iso(19358.25).as_deref(),
            Some("2023-01-01T06:00:00+00:00")
        );
    }

    #[test]
    fn string_ticks_pass_through() {
        let ticks = vec![Scalar::Text("a".into()), Scalar::Text("b".into())];
        assert_eq!(extract_ticks(AxisTransform::Numeric, &ticks), ticks);
    }
}
