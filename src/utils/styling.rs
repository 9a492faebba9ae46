//! Terminal styling utilities

use std::path::Path;
use std::time::Duration;

use console::style;

use crate::cli::RunConfig;

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("autoeda").cyan().bold(),
        style("one-shot exploratory data analysis").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print the resolved configuration
pub fn print_config(config: &RunConfig) {
    println!();
    println!(
        "    {} {}",
        style("⚙").cyan(),
        style("Configuration").white().bold()
    );
    println!("      File:      {}", style(config.file.display()).dim());
    println!("      Separator: {:?}", config.sep);
    println!("      Encoding:  {}", config.encoding);
    if !config.extra_na_tokens.is_empty() {
        println!("      NA tokens: {}", config.extra_na_tokens.join(", "));
    }
    if let Some(limit) = config.limit_rows {
        println!("      Row limit: {}", limit);
    }
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", style("ℹ").cyan(), message);
}

/// Print the elapsed time of a pipeline step
pub fn print_step_time(elapsed: Duration) {
    println!("    {}", style(format!("({:.2}s)", elapsed.as_secs_f64())).dim());
}

/// Print the final completion message with the output locations
pub fn print_completion(summary_path: &Path, sample_path: &Path, charts_dir: &Path) {
    println!();
    println!(
        "    {} {}",
        style(">>").cyan().bold(),
        style("EDA complete.").green().bold()
    );
    println!("      Text summary: {}", style(summary_path.display()).dim());
    println!("      Sample head:  {}", style(sample_path.display()).dim());
    println!("      Charts saved in: {}", style(charts_dir.display()).dim());
    println!();
}
