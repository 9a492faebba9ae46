//! Column classification, missing-value counts and descriptive statistics

use anyhow::Result;
use polars::prelude::*;

/// Descriptive statistics for one numeric column.
///
/// `std` uses the sample convention (ddof = 1) and is NaN below two values;
/// quartiles use linear interpolation on the sorted non-null values.
#[derive(Debug, Clone)]
pub struct NumericSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Names of columns inferred numeric, in column order.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| col.dtype().is_primitive_numeric())
        .map(|col| col.name().to_string())
        .collect()
}

/// Names of non-numeric (categorical) columns, in column order.
pub fn categorical_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| !col.dtype().is_primitive_numeric())
        .map(|col| col.name().to_string())
        .collect()
}

/// Per-column null counts, restricted to columns with at least one null.
/// Column order is preserved.
pub fn missing_counts(df: &DataFrame) -> Vec<(String, usize)> {
    df.get_columns()
        .iter()
        .filter(|col| col.null_count() > 0)
        .map(|col| (col.name().to_string(), col.null_count()))
        .collect()
}

/// Compute descriptive statistics for every numeric column, in column order.
pub fn describe_numeric(df: &DataFrame) -> Result<Vec<NumericSummary>> {
    let mut summaries = Vec::new();

    for col in df.get_columns() {
        if !col.dtype().is_primitive_numeric() {
            continue;
        }
        let mut values = non_null_values(col)?;
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        summaries.push(summarize_sorted(col.name().to_string(), &values));
    }

    Ok(summaries)
}

/// Extract the finite non-null values of a column as f64.
pub fn non_null_values(col: &Column) -> Result<Vec<f64>> {
    let casted = col.cast(&DataType::Float64)?;
    let ca = casted.f64()?;
    Ok(ca.into_iter().flatten().filter(|v| v.is_finite()).collect())
}

fn summarize_sorted(name: String, sorted: &[f64]) -> NumericSummary {
    let count = sorted.len();

    if count == 0 {
        return NumericSummary {
            name,
            count,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std = if count < 2 {
        f64::NAN
    } else {
        let ss: f64 = sorted.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (count - 1) as f64).sqrt()
    };

    NumericSummary {
        name,
        count,
        mean,
        std,
        min: sorted[0],
        q25: quantile_linear(sorted, 0.25),
        median: quantile_linear(sorted, 0.50),
        q75: quantile_linear(sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Linearly interpolated quantile of already-sorted values.
pub fn quantile_linear(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
    }
}
