use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// A delimited table held as trimmed text cells.
///
/// Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Case-insensitive header lookup.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .or_else(|| {
                self.headers
                    .iter()
                    .position(|header| header.eq_ignore_ascii_case(name))
            })
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Build a table from a header row and raw rows, skipping blank rows and
/// padding or truncating each row to the header width.
pub(crate) fn assemble_table(headers: &[String], raw_rows: Vec<Vec<String>>) -> CsvTable {
    let headers: Vec<String> = headers.iter().map(|value| normalize_header(value)).collect();
    let mut rows = Vec::with_capacity(raw_rows.len());
    for record in raw_rows {
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map_or("", String::as_str);
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    CsvTable { headers, rows }
}

/// Read a CSV file with the first non-blank line as header.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        raw_rows.push(record.iter().map(normalize_cell).collect());
    }
    let Some(header_index) = raw_rows
        .iter()
        .position(|row| row.iter().any(|value| !value.trim().is_empty()))
    else {
        return Ok(CsvTable::default());
    };
    let mut data = raw_rows.split_off(header_index);
    let headers = data.remove(0);
    Ok(assemble_table(&headers, data))
}
