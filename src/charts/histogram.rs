//! Per-column histogram rendering

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use polars::prelude::Column;

use super::ChartStyle;
use crate::pipeline::stats::non_null_values;

/// Render a 30-bin histogram for one numeric column.
///
/// Returns `false` without touching the filesystem when the column has no
/// non-null values. The file is named `hist_<column>.png`.
pub fn render_histogram(col: &Column, style: &ChartStyle, out_dir: &Path) -> Result<bool> {
    let values = non_null_values(col)?;
    if values.is_empty() {
        return Ok(false);
    }

    let name = col.name().to_string();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in &values {
        min = min.min(v);
        max = max.max(v);
    }

    // A constant column still gets a chart: the range is widened by half a
    // unit each way and every value lands in the middle bin
    let (lo, hi) = if max - min > 0.0 {
        (min, max)
    } else {
        (min - 0.5, min + 0.5)
    };

    let bins = style.hist_bins;
    let bin_width = (hi - lo) / bins as f64;
    let mut counts = vec![0u32; bins];
    for &v in &values {
        let mut idx = ((v - lo) / bin_width) as usize;
        if idx >= bins {
            idx = bins - 1;
        }
        counts[idx] += 1;
    }

    let y_max = counts.iter().copied().max().unwrap_or(1).max(1);
    let path = out_dir.join(format!("hist_{}.png", name));

    let root = BitMapBackend::new(&path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Histogram - {}", name), ("sans-serif", style.title_size))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(lo..hi, 0u32..y_max + y_max / 20 + 1)?;

    chart
        .configure_mesh()
        .x_desc(name.as_str())
        .y_desc("Count")
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
        let x0 = lo + bin_width * i as f64;
        let x1 = x0 + bin_width;
        Rectangle::new([(x0, 0u32), (x1, count)], BLUE.mix(0.6).filled())
    }))?;

    root.present()
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;

    Ok(true)
}
