//! Plain aggregate values handed to the presentation layer.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Headline KPIs of one filtered subset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Percent of encounters readmitted within 30 days (1 decimal).
    pub readmission_rate: f64,
    /// Mean length of stay of readmitted encounters, in days (1 decimal).
    pub avg_los_readmitted: f64,
    /// Percent of readmitted encounters with 10+ medications (1 decimal).
    pub polypharmacy_rate: f64,
    pub encounter_count: usize,
    pub readmitted_count: usize,
}

/// Raw 2x2 counts of polypharmacy against 30-day readmission.
///
/// |                    | readmit30 | not readmit30 |
/// |--------------------|-----------|---------------|
/// | polypharmacy       | a         | b             |
/// | no polypharmacy    | c         | d             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContingencyTable {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
}

impl ContingencyTable {
    pub fn total(&self) -> usize {
        self.a + self.b + self.c + self.d
    }
}

/// Odds ratio with the uncorrected table it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsRatio {
    pub table: ContingencyTable,
    /// Rounded to 2 decimals.
    pub odds_ratio: f64,
}

/// Share of one category within a subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub label: String,
    pub count: usize,
    /// Percent of the subset (1 decimal).
    pub percent: f64,
}

/// 30-day readmission rate within one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRate {
    pub group: String,
    pub encounters: usize,
    pub readmitted_30: usize,
    /// Percent (1 decimal).
    pub rate: f64,
}

/// One equal-width exploratory histogram bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive start, exclusive end (the last bin also holds its end).
    pub range: Range<f64>,
    pub count: usize,
}
