//! Output directory and file writing

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;

/// Fixed output directory, created relative to the invocation location.
pub const OUTPUT_DIR: &str = "outputs";
/// Row preview file name.
pub const SAMPLE_FILE: &str = "sample_head.csv";
/// Summary report file name.
pub const SUMMARY_FILE: &str = "summary.txt";
/// Number of rows kept in the preview.
pub const SAMPLE_ROWS: usize = 20;

/// Create the output directory, recursively, tolerating an existing one.
pub fn ensure_output_dir(out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))
}

/// Write the first 20 rows as a comma-delimited preview, header included,
/// original column order preserved.
pub fn write_sample_head(df: &DataFrame, out_dir: &Path) -> Result<PathBuf> {
    let mut head = df.head(Some(SAMPLE_ROWS));
    let path = out_dir.join(SAMPLE_FILE);

    let mut file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create preview file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut head)
        .with_context(|| format!("Failed to write preview file: {}", path.display()))?;

    Ok(path)
}

/// Write the summary report as UTF-8 text.
pub fn write_summary(summary: &str, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(SUMMARY_FILE);
    std::fs::write(&path, summary)
        .with_context(|| format!("Failed to write summary file: {}", path.display()))?;
    Ok(path)
}
