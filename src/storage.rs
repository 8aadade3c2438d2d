use crate::charts::{Chart, ChartKind};
use crate::error::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the chart as JSON; no chart is written as `{}`.
pub fn write_json<W: Write>(chart: Option<&Chart>, mut writer: W, pretty: bool) -> Result<()> {
    let value = match chart {
        Some(c) => serde_json::to_value(c)?,
        None => serde_json::Value::Object(serde_json::Map::new()),
    };
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &value)?;
    } else {
        serde_json::to_writer(&mut writer, &value)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

/// Save the chart as pretty JSON.
pub fn save_json<P: AsRef<Path>>(chart: Option<&Chart>, path: P) -> Result<()> {
    let f = File::create(path)?;
    write_json(chart, f, true)
}

/// Write element records in long form, one measure per row:
/// `panel,chart_type,group,label,measure,value`.
///
/// `panel` is only filled for panels of a composite chart. Series points use
/// the point index as label and emit an `x` and a `y` row.
pub fn write_csv<W: Write>(chart: Option<&Chart>, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.serialize(("panel", "chart_type", "group", "label", "measure", "value"))?;
    if let Some(chart) = chart {
        for row in element_rows(chart, None) {
            wtr.serialize(row)?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Save element records as CSV with header.
pub fn save_csv<P: AsRef<Path>>(chart: Option<&Chart>, path: P) -> Result<()> {
    let f = File::create(path)?;
    write_csv(chart, f)
}

type Row = (Option<usize>, ChartKind, String, String, &'static str, String);

fn element_rows(chart: &Chart, panel: Option<usize>) -> Vec<Row> {
    if let Chart::Composite(c) = chart {
        return c
            .elements
            .iter()
            .enumerate()
            .flat_map(|(i, panel_chart)| element_rows(panel_chart, Some(i)))
            .collect();
    }
    let kind = chart.kind();
    let mut rows = Vec::new();
    let mut push = |group: &str, label: &str, measure: &'static str, value: String| {
        rows.push((panel, kind, group.to_string(), label.to_string(), measure, value));
    };
    match chart {
        Chart::Line(c) | Chart::Scatter(c) => {
            for series in &c.elements {
                for (i, (x, y)) in series.points.iter().enumerate() {
                    let idx = i.to_string();
                    push(&series.label, &idx, "x", x.to_string());
                    push(&series.label, &idx, "y", y.to_string());
                }
            }
        }
        Chart::Bar(c) => {
            for bar in &c.elements {
                push(&bar.group, &bar.label, "value", bar.value.to_string());
            }
        }
        Chart::Pie(c) => {
            for wedge in &c.elements {
                push("", &wedge.label, "angle", wedge.angle.to_string());
                push("", &wedge.label, "radius", wedge.radius.to_string());
            }
        }
        Chart::BoxAndWhisker(c) => {
            for b in &c.elements {
                push("", &b.label, "min", b.min.to_string());
                push("", &b.label, "first_quartile", b.first_quartile.to_string());
                push("", &b.label, "median", b.median.to_string());
                push("", &b.label, "third_quartile", b.third_quartile.to_string());
                push("", &b.label, "max", b.max.to_string());
                for o in &b.outliers {
                    push("", &b.label, "outlier", o.to_string());
                }
            }
        }
        Chart::Composite(_) | Chart::Unknown(_) => {}
    }
    rows
}
