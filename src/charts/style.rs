//! Fixed chart defaults, initialized once at startup

/// Process-wide chart defaults.
///
/// Built once in `main` and passed by reference to every renderer; nothing
/// mutates it after construction. Pixel sizes correspond to 10x6 in figures
/// (10x8 in for the heatmap) at 150 DPI.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels for histograms and bar charts.
    pub height: u32,
    /// Figure height in pixels for the correlation heatmap.
    pub heatmap_height: u32,
    /// Number of equal-width histogram bins.
    pub hist_bins: usize,
    /// Number of categories kept per bar chart.
    pub top_k: usize,
    /// Title font size.
    pub title_size: u32,
    /// Axis label font size.
    pub label_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 900,
            heatmap_height: 1200,
            hist_bins: 30,
            top_k: 20,
            title_size: 28,
            label_size: 14,
        }
    }
}
