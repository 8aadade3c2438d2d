//! Snapshot of a rendered figure: plot areas, axes and the graphical primitives
//! drawn on them.
//!
//! This is the read-only input of the extractor. A renderer (or a test) builds a
//! [`Figure`] once, either in code through the `with_*` helpers or by
//! deserializing the JSON form, and hands it to [`crate::chart_from_figure`].

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Output format for calendar datetimes (second precision).
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One coordinate as handed over by the renderer.
///
/// Renderers keep calendar values around for date axes; everything else is a
/// plain float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataValue {
    Number(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DataValue {
    /// Numeric value, `None` for calendar values.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            DataValue::Number(v) => Some(v),
            _ => None,
        }
    }

    /// Normalize for output: calendar values become ISO-8601 strings.
    pub fn to_scalar(&self) -> Scalar {
        match *self {
            DataValue::Number(v) => Scalar::Number(v),
            DataValue::Date(d) => Scalar::Text(d.format("%Y-%m-%d").to_string()),
            DataValue::DateTime(dt) => Scalar::Text(dt.format(DATETIME_FORMAT).to_string()),
        }
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Number(v)
    }
}

impl From<NaiveDate> for DataValue {
    fn from(d: NaiveDate) -> Self {
        DataValue::Date(d)
    }
}

impl From<NaiveDateTime> for DataValue {
    fn from(dt: NaiveDateTime) -> Self {
        DataValue::DateTime(dt)
    }
}

impl Serialize for DataValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_scalar().serialize(serializer)
    }
}

/// Accepts a JSON number, a `YYYY-MM-DD` date or a `YYYY-MM-DDTHH:MM:SS[.f]` datetime.
/// `null` is read as NaN, which is how JSON carries gaps in a line.
impl<'de> Deserialize<'de> for DataValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        struct DataValueVisitor;

        impl<'de> Visitor<'de> for DataValueVisitor {
            type Value = DataValue;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a number, an ISO-8601 date or an ISO-8601 datetime")
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(DataValue::Number(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(DataValue::Number(v as f64))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(DataValue::Number(v as f64))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(DataValue::Number(f64::NAN))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(DataValue::Number(f64::NAN))
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                    return Ok(DataValue::Date(d));
                }
                NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                    .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
                    .map(DataValue::DateTime)
                    .map_err(E::custom)
            }
        }

        deserializer.deserialize_any(DataValueVisitor)
    }
}

/// A number or a string: tick values and normalized point coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

/// Numbers and strings as written; `null` (a NaN on the way out) reads back as NaN.
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a number, a string or null")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(Scalar::Number(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Scalar::Number(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Scalar::Number(v as f64))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Scalar::Number(f64::NAN))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Scalar::Number(f64::NAN))
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
                Ok(Scalar::Text(s.to_string()))
            }

            fn visit_string<E: de::Error>(self, s: String) -> Result<Self::Value, E> {
                Ok(Scalar::Text(s))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

impl Scalar {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(v) => Some(*v),
            Scalar::Text(_) => None,
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Number(v) => write!(f, "{v}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Number(v)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// Coordinate converter attached to an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisTransform {
    #[default]
    Numeric,
    /// Positions are day numbers since 1970-01-01 UTC.
    Datetime,
}

/// One axis of a plot area as the renderer reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Axis {
    pub label: String,
    /// Scale name reported by the renderer (`"linear"`, `"log"`, ...).
    pub scale: String,
    pub transform: AxisTransform,
    pub ticks: Vec<Scalar>,
    pub tick_labels: Vec<String>,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            label: String::new(),
            scale: "linear".into(),
            transform: AxisTransform::Numeric,
            ticks: Vec::new(),
            tick_labels: Vec::new(),
        }
    }
}

impl Axis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_scale<S: Into<String>>(mut self, scale: S) -> Self {
        self.scale = scale.into();
        self
    }

    pub fn with_transform(mut self, transform: AxisTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Set tick positions and the text drawn at them.
    pub fn with_ticks<T, L, S>(mut self, ticks: T, labels: L) -> Self
    where
        T: IntoIterator,
        T::Item: Into<Scalar>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ticks = ticks.into_iter().map(Into::into).collect();
        self.tick_labels = labels.into_iter().map(Into::into).collect();
        self
    }
}

/// A polyline (data line, whisker, cap, median or grid line).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Line2D {
    pub label: String,
    pub xdata: Vec<DataValue>,
    pub ydata: Vec<DataValue>,
}

impl Line2D {
    pub fn new<S, X, Y>(label: S, xdata: X, ydata: Y) -> Self
    where
        S: Into<String>,
        X: IntoIterator,
        X::Item: Into<DataValue>,
        Y: IntoIterator,
        Y::Item: Into<DataValue>,
    {
        Self {
            label: label.into(),
            xdata: xdata.into_iter().map(Into::into).collect(),
            ydata: ydata.into_iter().map(Into::into).collect(),
        }
    }
}

/// Markers drawn at a set of offsets (scatter plots).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PointCollection {
    pub label: String,
    pub offsets: Vec<(DataValue, DataValue)>,
}

impl PointCollection {
    pub fn new<S: Into<String>>(label: S, offsets: Vec<(DataValue, DataValue)>) -> Self {
        Self {
            label: label.into(),
            offsets,
        }
    }
}

/// Filled closed path (box bodies of box-and-whisker plots).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathPatch {
    pub vertices: Vec<(f64, f64)>,
}

/// Axis-aligned filled rectangle (a bar).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rectangle {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            label: String::new(),
            x,
            y,
            width,
            height,
        }
    }
}

/// Circular sector of a pie chart; angles in degrees.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Wedge {
    pub label: String,
    pub theta1: f64,
    pub theta2: f64,
    pub r: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextArtist {
    pub text: String,
}

/// A rendered primitive attached to a plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Artist {
    Line(Line2D),
    PointCollection(PointCollection),
    PathPatch(PathPatch),
    Rectangle(Rectangle),
    Wedge(Wedge),
    Text(TextArtist),
}

/// A labeled group of bars (one series of a bar chart).
///
/// The rectangles of a container are also present in the plot area's artists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarContainer {
    pub label: String,
    pub bars: Vec<Rectangle>,
}

/// One rectangular coordinate system of a figure (a subplot).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotArea {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Rendered primitives in drawing order.
    pub artists: Vec<Artist>,
    pub containers: Vec<BarContainer>,
}

impl PlotArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_x_axis(mut self, axis: Axis) -> Self {
        self.x_axis = axis;
        self
    }

    pub fn with_y_axis(mut self, axis: Axis) -> Self {
        self.y_axis = axis;
        self
    }

    pub fn with_artist(mut self, artist: Artist) -> Self {
        self.artists.push(artist);
        self
    }

    /// Register a bar container and draw its rectangles.
    pub fn with_bar_container(mut self, container: BarContainer) -> Self {
        self.artists
            .extend(container.bars.iter().cloned().map(Artist::Rectangle));
        self.containers.push(container);
        self
    }

    /// Everything except text and annotations.
    pub fn non_text_artists(&self) -> impl Iterator<Item = &Artist> {
        self.artists
            .iter()
            .filter(|a| !matches!(a, Artist::Text(_)))
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line2D> {
        self.artists.iter().filter_map(|a| match a {
            Artist::Line(l) => Some(l),
            _ => None,
        })
    }

    pub fn collections(&self) -> impl Iterator<Item = &PointCollection> {
        self.artists.iter().filter_map(|a| match a {
            Artist::PointCollection(c) => Some(c),
            _ => None,
        })
    }

    pub fn path_patches(&self) -> impl Iterator<Item = &PathPatch> {
        self.artists.iter().filter_map(|a| match a {
            Artist::PathPatch(p) => Some(p),
            _ => None,
        })
    }

    pub fn wedges(&self) -> impl Iterator<Item = &Wedge> {
        self.artists.iter().filter_map(|a| match a {
            Artist::Wedge(w) => Some(w),
            _ => None,
        })
    }
}

/// Top-level rendered output: plot areas plus an optional caption.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Figure {
    pub suptitle: String,
    pub axes: Vec<PlotArea>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suptitle<S: Into<String>>(mut self, title: S) -> Self {
        self.suptitle = title.into();
        self
    }

    pub fn with_plot_area(mut self, area: PlotArea) -> Self {
        self.axes.push(area);
        self
    }
}

/// Empty renderer strings mean "not set".
pub(crate) fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
