//! Table loader for delimited text files

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;
use thiserror::Error;

use crate::cli::RunConfig;

/// Null spellings recognized in every run, before any `--na-values` extras.
/// A column whose remaining tokens all parse as numbers is inferred numeric.
pub const DEFAULT_NA_TOKENS: &[&str] =
    &["", "NA", "N/A", "null", "NULL", "NaN", "nan", "None"];

/// Errors raised while resolving loader inputs, before polars sees the file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("separator must be a single character, got '{0}'")]
    InvalidSeparator(String),

    #[error("unknown encoding label '{0}'")]
    UnknownEncoding(String),

    #[error("input could not be decoded as {0}")]
    Undecodable(String),
}

/// Load the configured file into an in-memory table.
///
/// Schema inference runs over the whole file, so a column is numeric only
/// when every non-null token parses as a number. The row limit is applied
/// after parsing as a deterministic prefix; inference is unaffected by it.
pub fn load_table(config: &RunConfig) -> Result<DataFrame> {
    let sep = parse_separator(&config.sep)?;
    let bytes = read_decoded(&config.file, &config.encoding)?;

    let null_tokens: Vec<PlSmallStr> = DEFAULT_NA_TOKENS
        .iter()
        .map(|t| PlSmallStr::from(*t))
        .chain(
            config
                .extra_na_tokens
                .iter()
                .map(|t| PlSmallStr::from(t.as_str())),
        )
        .collect();

    let parse_options = CsvParseOptions::default()
        .with_separator(sep)
        .with_null_values(Some(NullValues::AllColumns(null_tokens)));

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(parse_options)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .with_context(|| format!("Failed to parse delimited file: {}", config.file.display()))?;

    Ok(match config.limit_rows {
        Some(n) => df.head(Some(n)),
        None => df,
    })
}

/// The CSV parser takes a single byte separator.
fn parse_separator(sep: &str) -> Result<u8> {
    let bytes = sep.as_bytes();
    if bytes.len() == 1 {
        Ok(bytes[0])
    } else {
        Err(LoadError::InvalidSeparator(sep.to_string()).into())
    }
}

/// Read the file, transcoding to UTF-8 when a non-UTF-8 encoding is named.
///
/// UTF-8 input is passed through untouched and validated by the CSV parser;
/// anything else resolves through the WHATWG encoding labels.
fn read_decoded(path: &Path, encoding: &str) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let label = encoding.trim().to_ascii_lowercase();
    if label == "utf-8" || label == "utf8" {
        return Ok(bytes);
    }

    let enc = encoding_rs::Encoding::for_label(encoding.as_bytes())
        .ok_or_else(|| LoadError::UnknownEncoding(encoding.to_string()))?;
    let (text, _, had_errors) = enc.decode(&bytes);
    if had_errors {
        return Err(LoadError::Undecodable(encoding.to_string()).into());
    }

    Ok(text.into_owned().into_bytes())
}
