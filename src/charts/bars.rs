//! Top-K category frequency bar charts

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters::style::FontTransform;
use polars::prelude::Column;

use super::ChartStyle;
use crate::pipeline::categories::top_categories;

/// Render a top-K frequency bar chart for one categorical column.
///
/// Returns `false` without touching the filesystem when no values remain
/// after trimming and blank removal. The file is named `bar_<column>.png`.
pub fn render_bar_chart(col: &Column, style: &ChartStyle, out_dir: &Path) -> Result<bool> {
    let ranked = top_categories(col, style.top_k)?;
    if ranked.is_empty() {
        return Ok(false);
    }

    let name = col.name().to_string();
    let k = ranked.len();
    let y_max = ranked.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1);
    let path = out_dir.join(format!("bar_{}.png", name));

    let root = BitMapBackend::new(&path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Top {} Categories - {}", k, name),
            ("sans-serif", style.title_size),
        )
        .margin(10)
        .x_label_area_size(120)
        .y_label_area_size(60)
        .build_cartesian_2d((0..k).into_segmented(), 0u32..y_max + y_max / 20 + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(k)
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => ranked
                .get(*i)
                .map(|(value, _)| value.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_label_style(
            ("sans-serif", style.label_size)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_desc(name.as_str())
        .y_desc("Frequency")
        .draw()?;

    chart.draw_series(ranked.iter().enumerate().map(|(i, (_, count))| {
        Rectangle::new(
            [
                (SegmentValue::Exact(i), 0u32),
                (SegmentValue::Exact(i + 1), *count),
            ],
            BLUE.mix(0.6).filled(),
        )
    }))?;

    root.present()
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;

    Ok(true)
}
