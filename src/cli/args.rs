//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Autoeda - one-shot exploratory data analysis for delimited datasets
#[derive(Parser, Debug)]
#[command(name = "autoeda")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input delimited text file
    #[arg(long)]
    pub file: PathBuf,

    /// Field separator (single character)
    #[arg(long, default_value = ",")]
    pub sep: String,

    /// File encoding (e.g. utf-8, latin1, windows-1252)
    #[arg(long, default_value = "utf-8")]
    pub encoding: String,

    /// Additional strings to treat as missing values, ';'-separated.
    /// Example: 'NA;None;-'
    #[arg(long)]
    pub na_values: Option<String>,

    /// Keep only the first N rows (deterministic prefix, applied after parsing)
    #[arg(long, value_parser = validate_limit_rows)]
    pub limit_rows: Option<usize>,
}

/// Validator for the limit_rows parameter
fn validate_limit_rows(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid row count", s))?;

    if value == 0 {
        Err("limit-rows must be at least 1".to_string())
    } else {
        Ok(value)
    }
}

/// Resolved, immutable run configuration.
///
/// The extra null tokens are already split out of the raw `--na-values`
/// string; downstream stages never see the ';'-joined form.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub file: PathBuf,
    pub sep: String,
    pub encoding: String,
    pub extra_na_tokens: Vec<String>,
    pub limit_rows: Option<usize>,
}

impl Cli {
    /// Normalize the raw arguments into a [`RunConfig`].
    pub fn into_config(self) -> RunConfig {
        let extra_na_tokens = self
            .na_values
            .as_deref()
            .map(|s| {
                s.split(';')
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        RunConfig {
            file: self.file,
            sep: self.sep,
            encoding: self.encoding,
            extra_na_tokens,
            limit_rows: self.limit_rows,
        }
    }
}
