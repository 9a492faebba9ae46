//! Autoeda: one-shot exploratory data analysis CLI
//!
//! Loads a delimited dataset, writes a text summary and a 20-row preview,
//! and renders histogram/bar/heatmap charts into `outputs/`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use autoeda::charts::{render_charts, ChartStyle};
use autoeda::cli::Cli;
use autoeda::pipeline::load_table;
use autoeda::report::{
    build_summary, ensure_output_dir, write_sample_head, write_summary, OUTPUT_DIR,
};
use autoeda::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.into_config();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let out_dir = Path::new(OUTPUT_DIR);

    // Step 1: Load dataset. Any load failure aborts here, before any output
    // is produced.
    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let df = load_table(&config)?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols) = df.shape();
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    print_step_time(step_start.elapsed());

    // Step 2: Summary report and row preview
    print_step_header(2, "Summary Report");
    let step_start = Instant::now();
    ensure_output_dir(out_dir)?;
    let sample_path = write_sample_head(&df, out_dir)?;
    let summary = build_summary(&df)?;
    let summary_path = write_summary(&summary, out_dir)?;
    print_success("Summary and preview written");
    print_step_time(step_start.elapsed());

    // Step 3: Charts
    print_step_header(3, "Chart Rendering");
    let step_start = Instant::now();
    let style = ChartStyle::default();
    let charts = render_charts(&df, &style, out_dir)?;
    print_success(&format!(
        "{} histogram(s), {} bar chart(s) rendered",
        charts.histograms, charts.bar_charts
    ));
    if charts.heatmap {
        print_success("Correlation heatmap rendered");
    } else {
        print_info("Fewer than two numeric columns, heatmap skipped");
    }
    print_step_time(step_start.elapsed());

    print_completion(&summary_path, &sample_path, out_dir);

    Ok(())
}
