//! Multi-dimensional categorical filter.

use tracing::debug;

use readmit_model::{Encounter, FilterSelection};

/// Encounters admitted by `selection`, in source order.
///
/// A row is kept when its age group, gender and admission type are each in
/// the matching selection set. Any empty set yields an empty subset.
pub fn filter<'a>(encounters: &'a [Encounter], selection: &FilterSelection) -> Vec<&'a Encounter> {
    if selection.excludes_everything() {
        debug!(total = encounters.len(), "empty filter dimension, nothing selected");
        return Vec::new();
    }
    let subset: Vec<&Encounter> = encounters
        .iter()
        .filter(|encounter| selection.matches(encounter))
        .collect();
    debug!(
        total = encounters.len(),
        selected = subset.len(),
        age_groups = selection.age_groups.len(),
        genders = selection.genders.len(),
        admission_types = selection.admission_types.len(),
        "filter applied"
    );
    subset
}
