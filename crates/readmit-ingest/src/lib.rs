//! Encounter dataset ingestion.
//!
//! Reads the delimited source table (csv crate for small files, Polars for
//! large ones), checks the required columns, coerces dirty medication counts
//! to missing, and produces the immutable [`Dataset`] snapshot.

pub mod csv_table;
pub mod dataset;
pub mod error;
pub mod polars_utils;
pub mod streaming;

pub use csv_table::{CsvTable, read_csv_table};
pub use dataset::{Dataset, REQUIRED_COLUMNS, load_dataset, load_dataset_with_options};
pub use error::{IngestError, Result};
pub use polars_utils::any_to_string;
pub use streaming::{
    DEFAULT_STREAMING_THRESHOLD_BYTES, IngestOptions, dataframe_to_csv_table,
    read_csv_table_auto_with_options, read_frame, should_use_streaming_with_threshold,
};
