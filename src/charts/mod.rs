//! Chart rendering - histograms, category bars and the correlation heatmap
//!
//! Each renderer opens one bitmap backend, writes its PNG and releases the
//! drawing resources before the next column, so peak memory stays bounded
//! regardless of column count.

pub mod bars;
pub mod heatmap;
pub mod histogram;
pub mod style;

use std::path::Path;

use anyhow::Result;
use polars::prelude::DataFrame;

pub use bars::render_bar_chart;
pub use heatmap::{render_heatmap, HEATMAP_FILE};
pub use histogram::render_histogram;
pub use style::ChartStyle;

use crate::pipeline::correlation::correlation_matrix;
use crate::utils::create_progress_bar;

/// What the render pass produced.
#[derive(Debug, Default)]
pub struct ChartReport {
    pub histograms: usize,
    pub bar_charts: usize,
    pub heatmap: bool,
}

/// Render all chart families for the table into `out_dir`.
///
/// Columns are visited in table order; the heatmap is skipped when fewer
/// than two numeric columns exist. File names are deterministic, so
/// re-running overwrites earlier artifacts instead of accumulating.
pub fn render_charts(df: &DataFrame, style: &ChartStyle, out_dir: &Path) -> Result<ChartReport> {
    let mut report = ChartReport::default();

    let pb = create_progress_bar(df.width() as u64 + 1, "   Rendering charts");

    for col in df.get_columns() {
        if col.dtype().is_primitive_numeric() {
            if render_histogram(col, style, out_dir)? {
                report.histograms += 1;
            }
        } else if render_bar_chart(col, style, out_dir)? {
            report.bar_charts += 1;
        }
        pb.inc(1);
    }

    if let Some(matrix) = correlation_matrix(df)? {
        render_heatmap(&matrix, style, out_dir)?;
        report.heatmap = true;
    }
    pb.inc(1);

    pb.finish_and_clear();

    Ok(report)
}
