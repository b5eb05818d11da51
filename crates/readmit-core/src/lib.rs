//! Readmission analytics engine.
//!
//! Pure functions over an immutable slice of [`Encounter`]s: the filter
//! engine, the KPI aggregator, distribution binning and the polypharmacy odds
//! ratio, plus the breakdowns and lookups built on top of them. Nothing here
//! performs I/O.
//!
//! [`Encounter`]: readmit_model::Encounter

pub mod binning;
pub mod dashboard;
pub mod eda;
pub mod explore;
pub mod filter;
pub mod insights;
pub mod kpi;
pub mod odds;

pub use binning::{
    bin_distribution, histogram, length_of_stay_distribution, medication_distribution,
};
pub use dashboard::Dashboard;
pub use eda::{readmission_breakdown, readmission_by_age_group};
pub use explore::{patient_encounters, readmitted_patients, search};
pub use filter::filter;
pub use insights::{Insight, Status, insights};
pub use kpi::{KpiSnapshot, compute_kpis};
pub use odds::{ZERO_CELL_CORRECTION, contingency_table, odds_ratio, odds_ratio_from_table};
