//! Categorical breakdowns for exploratory analysis.

use std::collections::BTreeMap;

use readmit_common::{percent, round_to};
use readmit_model::{CategoryShare, Encounter, GroupRate, Readmitted};

/// Share of each readmission outcome present in the subset, largest first.
pub fn readmission_breakdown(subset: &[&Encounter]) -> Vec<CategoryShare> {
    let mut shares: Vec<CategoryShare> = Readmitted::ALL
        .iter()
        .map(|outcome| {
            let count = subset.iter().filter(|e| e.readmitted == *outcome).count();
            CategoryShare {
                label: outcome.label().to_string(),
                count,
                percent: round_to(percent(count, subset.len()), 1),
            }
        })
        .filter(|share| share.count > 0)
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    shares
}

/// 30-day readmission rate per age group, ordered by age group.
pub fn readmission_by_age_group(subset: &[&Encounter]) -> Vec<GroupRate> {
    let mut groups: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for encounter in subset {
        let entry = groups.entry(encounter.age_group.as_str()).or_default();
        entry.0 += 1;
        if encounter.is_readmitted_30() {
            entry.1 += 1;
        }
    }
    groups
        .into_iter()
        .map(|(group, (encounters, readmitted_30))| GroupRate {
            group: group.to_string(),
            encounters,
            readmitted_30,
            rate: round_to(percent(readmitted_30, encounters), 1),
        })
        .collect()
}
