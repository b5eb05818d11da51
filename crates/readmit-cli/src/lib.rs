//! CLI library components for readmission analytics.

pub mod logging;
pub mod selection;
pub mod summary;
