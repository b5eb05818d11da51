//! Headline KPIs of a filtered subset.

use tracing::debug;

use readmit_common::{percent, round_to};
use readmit_model::{Encounter, KpiSummary};

/// KPIs computed from one filtered subset.
///
/// Never updated in place: a new filter means a new snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSnapshot<'a> {
    /// Percent of encounters with `readmitted == "<30"`, 1 decimal.
    pub readmission_rate: f64,
    /// Mean `time_in_hospital` over [`Self::readmitted`], 1 decimal.
    pub avg_los_readmitted: f64,
    /// Percent of [`Self::readmitted`] with 10+ medications, 1 decimal.
    pub polypharmacy_rate: f64,
    /// Size of the subset the snapshot was computed from.
    pub encounter_count: usize,
    /// Encounters readmitted at any point (`<30` or `>30`).
    pub readmitted: Vec<&'a Encounter>,
}

impl KpiSnapshot<'_> {
    pub fn readmitted_count(&self) -> usize {
        self.readmitted.len()
    }

    /// Plain numbers for export and serialization.
    pub fn summary(&self) -> KpiSummary {
        KpiSummary {
            readmission_rate: self.readmission_rate,
            avg_los_readmitted: self.avg_los_readmitted,
            polypharmacy_rate: self.polypharmacy_rate,
            encounter_count: self.encounter_count,
            readmitted_count: self.readmitted.len(),
        }
    }
}

/// Compute the three headline KPIs.
///
/// Every rate has its own empty-denominator guard and is `0.0` when there is
/// nothing to divide by.
pub fn compute_kpis<'a>(subset: &[&'a Encounter]) -> KpiSnapshot<'a> {
    let readmitted_30 = subset.iter().filter(|e| e.is_readmitted_30()).count();
    let readmission_rate = round_to(percent(readmitted_30, subset.len()), 1);

    let readmitted: Vec<&'a Encounter> = subset
        .iter()
        .copied()
        .filter(|e| e.is_readmitted())
        .collect();

    let (avg_los_readmitted, polypharmacy_rate) = if readmitted.is_empty() {
        (0.0, 0.0)
    } else {
        let total_los: u64 = readmitted
            .iter()
            .map(|e| u64::from(e.time_in_hospital))
            .sum();
        let mean_los = total_los as f64 / readmitted.len() as f64;
        let polypharmacy = readmitted.iter().filter(|e| e.is_polypharmacy()).count();
        (
            round_to(mean_los, 1),
            round_to(percent(polypharmacy, readmitted.len()), 1),
        )
    };

    debug!(
        encounters = subset.len(),
        readmitted = readmitted.len(),
        readmission_rate,
        avg_los_readmitted,
        polypharmacy_rate,
        "kpis computed"
    );

    KpiSnapshot {
        readmission_rate,
        avg_los_readmitted,
        polypharmacy_rate,
        encounter_count: subset.len(),
        readmitted,
    }
}
