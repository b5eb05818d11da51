//! Data model for inpatient readmission analytics.
//!
//! Everything here is plain data: the encounter record, the filter universe
//! and selection, bin partitions, and the aggregate values computed by
//! `readmit-core`.

pub mod admission;
pub mod bins;
pub mod encounter;
pub mod error;
pub mod filter;
pub mod stats;

pub use admission::{ADMISSION_TYPE_LABELS, admission_type_label};
pub use bins::{Bin, BinCount, BinSpec};
pub use encounter::{AdmissionTypeId, Encounter, POLYPHARMACY_THRESHOLD, Readmitted};
pub use error::{ModelError, Result};
pub use filter::{Dimension, FilterOptions, FilterSelection};
pub use stats::{CategoryShare, ContingencyTable, GroupRate, HistogramBin, KpiSummary, OddsRatio};
