//! Polars-backed CSV reading for large files.
//!
//! The full encounter extract is tens of megabytes. Above
//! [`DEFAULT_STREAMING_THRESHOLD_BYTES`] the file is parsed by Polars'
//! multi-threaded CSV reader and converted to a [`CsvTable`]; smaller files
//! go through the `csv` crate reader.
//!
//! Every column is read as text. Type coercion is the loader's job, and dirty
//! cells such as `?` in numeric columns must never abort the scan.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::csv_table::{CsvTable, assemble_table, read_csv_table};
use crate::error::{IngestError, Result};
use crate::polars_utils::any_to_string;

/// Default file size threshold (in bytes) above which Polars is used.
/// Default: 10 MB
pub const DEFAULT_STREAMING_THRESHOLD_BYTES: u64 = 10 * 1024 * 1024;

/// Options for reading the source table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Files at or above this size are read with Polars.
    pub streaming_threshold_bytes: u64,
    /// Trade Polars reader speed for a smaller peak allocation.
    pub low_memory: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            streaming_threshold_bytes: DEFAULT_STREAMING_THRESHOLD_BYTES,
            low_memory: false,
        }
    }
}

impl IngestOptions {
    /// Set the size threshold for the Polars reader.
    pub fn with_streaming_threshold(mut self, bytes: u64) -> Self {
        self.streaming_threshold_bytes = bytes;
        self
    }

    /// Enable low memory mode.
    pub fn with_low_memory(mut self, enabled: bool) -> Self {
        self.low_memory = enabled;
        self
    }
}

/// Read the whole file into a DataFrame of string columns.
pub fn read_frame(path: &Path, options: &IngestOptions) -> Result<DataFrame> {
    let parse_error = |e: polars::prelude::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_low_memory(options.low_memory)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)
}

/// Convert a Polars DataFrame to CsvTable format.
pub fn dataframe_to_csv_table(df: &DataFrame) -> Result<CsvTable> {
    let headers: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        let mut row = Vec::with_capacity(headers.len());
        for col in df.get_columns() {
            let value = col.get(row_idx)?;
            row.push(any_to_string(value));
        }
        rows.push(row);
    }

    Ok(assemble_table(&headers, rows))
}

/// Check if a file should use Polars based on a threshold.
pub fn should_use_streaming_with_threshold(path: &Path, threshold_bytes: u64) -> bool {
    std::fs::metadata(path)
        .map(|m| m.len() >= threshold_bytes)
        .unwrap_or(false)
}

/// Read a CSV file with options, automatically using Polars for large files.
pub fn read_csv_table_auto_with_options(path: &Path, options: &IngestOptions) -> Result<CsvTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    if should_use_streaming_with_threshold(path, options.streaming_threshold_bytes) {
        debug!(path = %path.display(), "using Polars reader for large file");
        let df = read_frame(path, options)?;
        dataframe_to_csv_table(&df)
    } else {
        read_csv_table(path)
    }
}
