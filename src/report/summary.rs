//! Text summary report generation

use anyhow::Result;
use comfy_table::{presets::NOTHING, Cell, CellAlignment, Table};
use polars::prelude::*;

use crate::pipeline::stats::{
    categorical_column_names, describe_numeric, missing_counts, NumericSummary,
};

/// Build the full summary report for a loaded table.
///
/// Pure function of the table: shape, per-column dtypes, missing-value
/// counts, the numerical describe table and the categorical column list,
/// in that order. Sections are separated by blank lines.
pub fn build_summary(df: &DataFrame) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();

    let (rows, cols) = df.shape();
    lines.push("# Dataset Summary".to_string());
    lines.push(format!("Rows: {}, Columns: {}", rows, cols));
    lines.push(String::new());

    lines.push("## Dtypes".to_string());
    for col in df.get_columns() {
        lines.push(format!("{}: {}", col.name(), col.dtype()));
    }
    lines.push(String::new());

    lines.push("## Missing Values (per column)".to_string());
    let missing = missing_counts(df);
    if missing.is_empty() {
        lines.push("No missing values.".to_string());
    } else {
        for (name, count) in missing {
            lines.push(format!("{}: {}", name, count));
        }
    }
    lines.push(String::new());

    lines.push("## Numerical Summary (describe)".to_string());
    let summaries = describe_numeric(df)?;
    if summaries.is_empty() {
        lines.push("No numeric columns.".to_string());
    } else {
        lines.push(describe_table(&summaries));
    }
    lines.push(String::new());

    lines.push("## Categorical Columns".to_string());
    let categorical = categorical_column_names(df);
    if categorical.is_empty() {
        lines.push("No categorical columns.".to_string());
    } else {
        lines.push(categorical.join(", "));
    }
    lines.push(String::new());

    Ok(lines.join("\n"))
}

/// Stats as rows, one table column per numeric column, plain whitespace
/// preset so the report stays grep-friendly text.
fn describe_table(summaries: &[NumericSummary]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);

    let mut header = vec![Cell::new("")];
    header.extend(summaries.iter().map(|s| Cell::new(&s.name)));
    table.set_header(header);

    let stat_rows: [(&str, fn(&NumericSummary) -> String); 8] = [
        ("count", |s| s.count.to_string()),
        ("mean", |s| format_stat(s.mean)),
        ("std", |s| format_stat(s.std)),
        ("min", |s| format_stat(s.min)),
        ("25%", |s| format_stat(s.q25)),
        ("50%", |s| format_stat(s.median)),
        ("75%", |s| format_stat(s.q75)),
        ("max", |s| format_stat(s.max)),
    ];

    for (label, value) in stat_rows {
        let mut row = vec![Cell::new(label)];
        row.extend(summaries.iter().map(|s| Cell::new(value(s))));
        table.add_row(row);
    }

    for column in table.column_iter_mut().skip(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table.to_string()
}

fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.6}", value)
    }
}
