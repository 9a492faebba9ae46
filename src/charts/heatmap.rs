//! Correlation heatmap rendering

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use super::ChartStyle;
use crate::pipeline::correlation::CorrelationMatrix;

/// File name of the single heatmap artifact.
pub const HEATMAP_FILE: &str = "correlation_heatmap.png";

// Diverging endpoints, roughly the vlag palette
const NEGATIVE: (u8, u8, u8) = (34, 105, 189);
const POSITIVE: (u8, u8, u8) = (169, 55, 59);
const UNDEFINED: RGBColor = RGBColor(180, 180, 180);

/// Render the pairwise correlation heatmap.
///
/// The caller only invokes this with a matrix of at least two columns; with
/// fewer numeric columns no matrix exists and no file is produced. Cells are
/// colored on a diverging scale centered at zero, without annotations.
pub fn render_heatmap(
    matrix: &CorrelationMatrix,
    style: &ChartStyle,
    out_dir: &Path,
) -> Result<()> {
    let n = matrix.len();
    let names = matrix.names();
    let path = out_dir.join(HEATMAP_FILE);

    let root =
        BitMapBackend::new(&path, (style.width, style.heatmap_height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Correlation Heatmap (numeric features)",
            ("sans-serif", style.title_size),
        )
        .margin(10)
        .x_label_area_size(120)
        .y_label_area_size(140)
        .build_cartesian_2d((0..n).into_segmented(), (0..n).into_segmented())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&|v| segment_label(v, names, false))
        .y_label_formatter(&|v| segment_label(v, names, true))
        .x_label_style(("sans-serif", style.label_size))
        .y_label_style(("sans-serif", style.label_size))
        .draw()?;

    // First column reads top-left, so rows are drawn with the y axis flipped
    chart.draw_series((0..n).flat_map(|i| {
        (0..n).map(move |j| {
            let corr = matrix.get(i, n - 1 - j);
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), SegmentValue::Exact(j)),
                    (SegmentValue::Exact(i + 1), SegmentValue::Exact(j + 1)),
                ],
                cell_color(corr).filled(),
            )
        })
    }))?;

    root.present()
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;

    Ok(())
}

fn segment_label(v: &SegmentValue<usize>, names: &[String], flipped: bool) -> String {
    match v {
        SegmentValue::CenterOf(i) => {
            let idx = if flipped {
                match names.len().checked_sub(1 + *i) {
                    Some(idx) => idx,
                    None => return String::new(),
                }
            } else {
                *i
            };
            names.get(idx).cloned().unwrap_or_default()
        }
        _ => String::new(),
    }
}

/// Map a correlation to a diverging color centered at zero.
fn cell_color(corr: Option<f64>) -> RGBColor {
    let Some(r) = corr else {
        return UNDEFINED;
    };

    let t = r.clamp(-1.0, 1.0);
    let (end, amount) = if t >= 0.0 {
        (POSITIVE, t)
    } else {
        (NEGATIVE, -t)
    };

    RGBColor(
        lerp(255, end.0, amount),
        lerp(255, end.1, amount),
        lerp(255, end.2, amount),
    )
}

fn lerp(from: u8, to: u8, amount: f64) -> u8 {
    (from as f64 + (to as f64 - from as f64) * amount).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: RGBColor) -> (u8, u8, u8) {
        (color.0, color.1, color.2)
    }

    #[test]
    fn zero_correlation_is_white() {
        assert_eq!(rgb(cell_color(Some(0.0))), (255, 255, 255));
    }

    #[test]
    fn extremes_hit_palette_endpoints() {
        assert_eq!(rgb(cell_color(Some(1.0))), POSITIVE);
        assert_eq!(rgb(cell_color(Some(-1.0))), NEGATIVE);
    }

    #[test]
    fn undefined_cells_are_gray() {
        assert_eq!(rgb(cell_color(None)), (180, 180, 180));
    }
}
