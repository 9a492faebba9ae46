//! Integration tests for chart rendering

use autoeda::charts::{render_bar_chart, render_charts, render_histogram, ChartStyle};
use polars::prelude::*;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

fn png_names(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|n| n.ends_with(".png"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_full_chart_set_for_mixed_table() {
    let df = common::create_mixed_dataframe();
    let out = TempDir::new().unwrap();

    let report = render_charts(&df, &ChartStyle::default(), out.path()).unwrap();

    assert_eq!(report.histograms, 2);
    assert_eq!(report.bar_charts, 1);
    assert!(report.heatmap, "two numeric columns should produce a heatmap");
    assert_eq!(
        png_names(&out),
        vec![
            "bar_city.png",
            "correlation_heatmap.png",
            "hist_age.png",
            "hist_income.png",
        ]
    );
}

#[test]
fn test_chart_files_are_not_empty() {
    let df = common::create_mixed_dataframe();
    let out = TempDir::new().unwrap();

    render_charts(&df, &ChartStyle::default(), out.path()).unwrap();

    for name in png_names(&out) {
        let size = std::fs::metadata(out.path().join(&name)).unwrap().len();
        assert!(size > 0, "{} should not be empty", name);
    }
}

#[test]
fn test_single_numeric_column_skips_heatmap() {
    let df = common::create_single_numeric_dataframe();
    let out = TempDir::new().unwrap();

    let report = render_charts(&df, &ChartStyle::default(), out.path()).unwrap();

    assert!(!report.heatmap);
    assert!(!out.path().join("correlation_heatmap.png").exists());
    assert!(out.path().join("hist_score.png").exists());
    assert!(out.path().join("bar_label.png").exists());
}

#[test]
fn test_all_null_numeric_column_skips_histogram() {
    let df = df! {
        "empty" => [None::<f64>, None, None],
    }
    .unwrap();
    let out = TempDir::new().unwrap();

    let produced =
        render_histogram(df.column("empty").unwrap(), &ChartStyle::default(), out.path()).unwrap();

    assert!(!produced);
    assert!(!out.path().join("hist_empty.png").exists());
}

#[test]
fn test_constant_numeric_column_still_renders() {
    let df = df! {
        "flat" => [5.0f64, 5.0, 5.0],
    }
    .unwrap();
    let out = TempDir::new().unwrap();

    let produced =
        render_histogram(df.column("flat").unwrap(), &ChartStyle::default(), out.path()).unwrap();

    assert!(produced);
    assert!(out.path().join("hist_flat.png").exists());
}

#[test]
fn test_blank_categorical_column_skips_bar_chart() {
    let df = df! {
        "blank" => ["", "   ", "\t"],
    }
    .unwrap();
    let out = TempDir::new().unwrap();

    let produced =
        render_bar_chart(df.column("blank").unwrap(), &ChartStyle::default(), out.path()).unwrap();

    assert!(!produced);
    assert!(!out.path().join("bar_blank.png").exists());
}

#[test]
fn test_rerun_overwrites_without_accumulating() {
    let df = common::create_mixed_dataframe();
    let out = TempDir::new().unwrap();

    render_charts(&df, &ChartStyle::default(), out.path()).unwrap();
    let first = png_names(&out);
    render_charts(&df, &ChartStyle::default(), out.path()).unwrap();
    let second = png_names(&out);

    assert_eq!(first, second, "re-running must not accumulate artifacts");
}
