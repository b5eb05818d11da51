//! Shared utilities for the readmission analytics crates.
//!
//! This crate provides the numeric parsing, rounding and formatting helpers
//! used by the loader, the aggregation engine and the exports.

pub mod numeric;

// Re-export commonly used functions at crate root for convenience
pub use numeric::{
    format_fixed, format_numeric, parse_f64, parse_u32, percent, round_to,
};
