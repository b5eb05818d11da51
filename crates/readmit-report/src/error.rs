//! Error types for exports.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing exports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Could not create the output directory or file.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the output failed.
    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    #[error("XML write failed: {0}")]
    Xml(#[from] quick_xml::Error),

    /// CSV serialization failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// A filtered encounter points at a row the source table does not have.
    #[error("source row {row} is missing from the table")]
    MissingRow { row: usize },
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
