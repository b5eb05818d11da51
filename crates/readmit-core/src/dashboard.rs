//! One full recomputation for a filter selection.

use tracing::info_span;

use readmit_model::{BinCount, CategoryShare, Encounter, FilterSelection, OddsRatio};

use crate::binning::{length_of_stay_distribution, medication_distribution};
use crate::eda::readmission_breakdown;
use crate::filter::filter;
use crate::insights::{Insight, insights};
use crate::kpi::{KpiSnapshot, compute_kpis};
use crate::odds::odds_ratio;

/// Everything the overview page shows for one selection.
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    pub subset: Vec<&'a Encounter>,
    pub kpis: KpiSnapshot<'a>,
    pub readmission_breakdown: Vec<CategoryShare>,
    /// Length of stay over the whole filtered subset.
    pub length_of_stay: Vec<BinCount>,
    /// Medication counts over the readmitted encounters.
    pub medications: Vec<BinCount>,
    /// `None` when the subset is empty.
    pub odds_ratio: Option<OddsRatio>,
    pub insights: [Insight; 3],
}

impl<'a> Dashboard<'a> {
    /// Filter, then derive every aggregate from the same subset.
    pub fn compute(encounters: &'a [Encounter], selection: &FilterSelection) -> Self {
        let span = info_span!("dashboard", total = encounters.len());
        let _guard = span.enter();

        let subset = filter(encounters, selection);
        let kpis = compute_kpis(&subset);
        let readmission_breakdown = readmission_breakdown(&subset);
        let length_of_stay = length_of_stay_distribution(&subset);
        let medications = medication_distribution(&kpis.readmitted);
        let odds_ratio = odds_ratio(&subset);
        let insights = insights(&kpis.summary());

        Self {
            subset,
            kpis,
            readmission_breakdown,
            length_of_stay,
            medications,
            odds_ratio,
            insights,
        }
    }
}
