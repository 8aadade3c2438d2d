use predicates::prelude::*;
use std::fs;
use assert_cmd::Command;
use tempfile::tempdir;

const BAR_FIGURE: &str = r#"{
  "axes": [{
    "title": "Book Sales by Authors",
    "x_axis": {"label": "Authors", "ticks": [0, 1], "tick_labels": ["Author A", "Author B"]},
    "y_axis": {"label": "Number of Books Sold"},
    "artists": [
      {"kind": "rectangle", "x": -0.4, "y": 0, "width": 0.8, "height": 100},
      {"kind": "rectangle", "x": 0.6, "y": 0, "width": 0.8, "height": 200}
    ],
    "containers": [{"label": "Books Sold", "bars": [
      {"x": -0.4, "y": 0, "width": 0.8, "height": 100},
      {"x": 0.6, "y": 0, "width": 0.8, "height": 200}
    ]}]
  }]
}"#;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("figure-charts").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("figure-charts"));
}

#[test]
fn extract_prints_chart_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("figure.json");
    fs::write(&input, BAR_FIGURE).unwrap();

    let mut cmd = Command::cargo_bin("figure-charts").unwrap();
    cmd.arg("extract").arg(&input);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["type"], "bar");
    assert_eq!(v["elements"][1]["label"], "Author B");
    assert_eq!(v["elements"][1]["value"], 200.0);
}

#[test]
fn extract_reads_stdin_and_writes_csv_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("bars.csv");

    let mut cmd = Command::cargo_bin("figure-charts").unwrap();
    cmd.args(["extract", "-", "--out"]).arg(&out);
    cmd.write_stdin(BAR_FIGURE);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote chart to"));

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("panel,chart_type,group,label,measure,value\n"));
    assert!(text.contains(",bar,Books Sold,Author A,value,100\n"));
}

#[test]
fn empty_figure_prints_empty_object() {
    let mut cmd = Command::cargo_bin("figure-charts").unwrap();
    cmd.args(["extract", "-"]).write_stdin(r#"{"axes": []}"#);
    cmd.assert().success().stdout("{}\n");
}

#[test]
fn classify_lists_each_plot_area() {
    let mut cmd = Command::cargo_bin("figure-charts").unwrap();
    cmd.args(["classify", "-"]).write_stdin(
        r#"{"axes": [
            {"title": "pie", "artists": [{"kind": "wedge", "theta1": 0, "theta2": 10, "r": 1}]},
            {}
        ]}"#,
    );
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0\tpie\tpie"))
        .stdout(predicate::str::contains("1\tunknown\t-"));
}

#[test]
fn invalid_json_fails() {
    let mut cmd = Command::cargo_bin("figure-charts").unwrap();
    cmd.args(["extract", "-"]).write_stdin("not json");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("parsing figure"));
}
