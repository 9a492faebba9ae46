//! Pairwise Pearson correlation over numeric columns

use anyhow::Result;
use polars::prelude::*;
use rayon::prelude::*;

/// Square correlation matrix over the numeric columns of a table.
///
/// Cells are `None` where the correlation is undefined (constant column or
/// fewer than two rows where both values are present).
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Vec<Option<f64>>,
}

impl CorrelationMatrix {
    /// Number of numeric columns covered by the matrix.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column names in table order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values[i * self.names.len() + j]
    }
}

/// Compute the pairwise Pearson correlation matrix over all numeric columns.
///
/// Nulls are excluded pairwise: each cell only considers rows where both
/// columns hold a value. Returns `None` when the table has fewer than two
/// numeric columns, in which case no heatmap should be rendered.
pub fn correlation_matrix(df: &DataFrame) -> Result<Option<CorrelationMatrix>> {
    let numeric_cols: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|col| col.dtype().is_primitive_numeric())
        .map(|col| col.name().to_string())
        .collect();

    let n = numeric_cols.len();
    if n < 2 {
        return Ok(None);
    }

    // Pre-cast all numeric columns to Float64 for the correlation passes
    let float_columns: Vec<(String, Column)> = numeric_cols
        .iter()
        .filter_map(|col_name| {
            df.column(col_name)
                .ok()
                .and_then(|col| col.cast(&DataType::Float64).ok())
                .map(|col| (col_name.clone(), col))
        })
        .collect();

    // Upper triangle including the diagonal; the diagonal goes through the
    // same computation so constant columns come out as undefined, not 1.0
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i..n).map(move |j| (i, j)))
        .collect();

    let computed: Vec<((usize, usize), Option<f64>)> = pairs
        .par_iter()
        .map(|&(i, j)| {
            let corr = pearson_pairwise(&float_columns[i].1, &float_columns[j].1);
            ((i, j), corr)
        })
        .collect();

    let mut values = vec![None; n * n];
    for ((i, j), corr) in computed {
        values[i * n + j] = corr;
        values[j * n + i] = corr;
    }

    Ok(Some(CorrelationMatrix {
        names: numeric_cols,
        values,
    }))
}

/// Pearson correlation with pairwise null exclusion.
///
/// Single-pass Welford update for numerical stability; only rows where both
/// columns are non-null contribute.
fn pearson_pairwise(s1: &Column, s2: &Column) -> Option<f64> {
    let ca1 = s1.f64().ok()?;
    let ca2 = s2.f64().ok()?;

    if ca1.len() != ca2.len() {
        return None;
    }

    let mut n = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in ca1.iter().zip(ca2.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            n += 1.0;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / n;
            mean_y += dy / n;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if n < 2.0 {
        return None;
    }

    let std_x = (var_x / n).sqrt();
    let std_y = (var_y / n).sqrt();

    if std_x == 0.0 || std_y == 0.0 {
        return None;
    }

    let corr = cov_xy / (n * std_x * std_y);
    if corr.is_nan() {
        None
    } else {
        Some(corr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfectly_correlated_columns() {
        let df = df! {
            "a" => [1.0f64, 2.0, 3.0, 4.0, 5.0],
            "b" => [2.0f64, 4.0, 6.0, 8.0, 10.0],
        }
        .unwrap();

        let matrix = correlation_matrix(&df).unwrap().unwrap();
        let corr = matrix.get(0, 1).unwrap();
        assert!((corr - 1.0).abs() < 1e-9, "expected 1.0, got {}", corr);
    }

    #[test]
    fn pairwise_null_exclusion() {
        // Rows where either side is null must not contribute. The remaining
        // complete pairs are (1,1), (2,2), (3,3): perfect correlation.
        let df = df! {
            "a" => [Some(1.0f64), Some(2.0), Some(3.0), None, Some(100.0)],
            "b" => [Some(1.0f64), Some(2.0), Some(3.0), Some(50.0), None],
        }
        .unwrap();

        let matrix = correlation_matrix(&df).unwrap().unwrap();
        let corr = matrix.get(0, 1).unwrap();
        assert!((corr - 1.0).abs() < 1e-9, "expected 1.0, got {}", corr);
    }

    #[test]
    fn constant_column_is_undefined() {
        let df = df! {
            "a" => [1.0f64, 2.0, 3.0],
            "b" => [5.0f64, 5.0, 5.0],
        }
        .unwrap();

        let matrix = correlation_matrix(&df).unwrap().unwrap();
        assert!(matrix.get(0, 1).is_none());
        assert!(matrix.get(1, 1).is_none());
        assert!(matrix.get(0, 0).is_some());
    }

    #[test]
    fn single_numeric_column_yields_no_matrix() {
        let df = df! {
            "a" => [1.0f64, 2.0, 3.0],
            "label" => ["x", "y", "z"],
        }
        .unwrap();

        assert!(correlation_matrix(&df).unwrap().is_none());
    }
}
