//! Shared test utilities and fixture generators

use std::io::Write;
use std::path::{Path, PathBuf};

use autoeda::cli::RunConfig;
use polars::prelude::*;
use tempfile::TempDir;

/// Write the given lines as a CSV file inside a fresh temp directory.
pub fn write_csv(lines: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    drop(file);

    (temp_dir, csv_path)
}

/// Default run configuration pointing at the given file.
pub fn config_for(path: &Path) -> RunConfig {
    RunConfig {
        file: path.to_path_buf(),
        sep: ",".to_string(),
        encoding: "utf-8".to_string(),
        extra_na_tokens: Vec::new(),
        limit_rows: None,
    }
}

/// A small table mixing two numeric columns and a categorical one.
pub fn create_mixed_dataframe() -> DataFrame {
    df! {
        "age" => [23.0f64, 35.0, 41.0, 29.0, 52.0],
        "income" => [1200.0f64, 2400.0, 3100.0, 1800.0, 4000.0],
        "city" => ["oslo", "bergen", "oslo", "oslo", "bergen"],
    }
    .unwrap()
}

/// A table whose only numeric column rules out the heatmap.
pub fn create_single_numeric_dataframe() -> DataFrame {
    df! {
        "score" => [1.0f64, 2.0, 3.0],
        "label" => ["x", "y", "z"],
    }
    .unwrap()
}
