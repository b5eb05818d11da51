//! Row search and readmitted-patient lookup for the data explorer.

use std::collections::HashSet;

use readmit_ingest::CsvTable;
use readmit_model::Encounter;

use crate::kpi::KpiSnapshot;

/// Rows of `subset` where any source column contains `needle`,
/// case-insensitively. A blank needle keeps every row.
pub fn search<'a>(table: &CsvTable, subset: &[&'a Encounter], needle: &str) -> Vec<&'a Encounter> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return subset.to_vec();
    }
    subset
        .iter()
        .copied()
        .filter(|encounter| {
            table.row(encounter.row).is_some_and(|cells| {
                cells
                    .iter()
                    .any(|cell| cell.to_lowercase().contains(&needle))
            })
        })
        .collect()
}

/// Distinct patient numbers among the readmitted encounters, first seen first.
pub fn readmitted_patients<'a>(kpis: &KpiSnapshot<'a>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    kpis.readmitted
        .iter()
        .map(|e| e.patient_nbr.as_str())
        .filter(|patient| seen.insert(*patient))
        .collect()
}

/// Readmitted encounters of one patient.
pub fn patient_encounters<'a>(kpis: &KpiSnapshot<'a>, patient_nbr: &str) -> Vec<&'a Encounter> {
    let patient_nbr = patient_nbr.trim();
    kpis.readmitted
        .iter()
        .copied()
        .filter(|e| e.patient_nbr == patient_nbr)
        .collect()
}
