//! Filter dimensions, the universe of selectable values, and selections.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::encounter::{AdmissionTypeId, Encounter};
use crate::error::{ModelError, Result};

/// A categorical filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    AgeGroup,
    Gender,
    AdmissionType,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::AgeGroup => "age group",
            Dimension::Gender => "gender",
            Dimension::AdmissionType => "admission type",
        })
    }
}

/// Sorted distinct values observed per dimension in the full dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub age_groups: BTreeSet<String>,
    pub genders: BTreeSet<String>,
    pub admission_types: BTreeSet<AdmissionTypeId>,
}

impl FilterOptions {
    pub fn from_encounters<'a, I>(encounters: I) -> Self
    where
        I: IntoIterator<Item = &'a Encounter>,
    {
        let mut options = Self::default();
        for encounter in encounters {
            options.age_groups.insert(encounter.age_group.clone());
            options.genders.insert(encounter.gender.clone());
            options.admission_types.insert(encounter.admission_type_id);
        }
        options
    }

    /// Resolve a user-supplied admission type: either the numeric id or its
    /// label (case-insensitive).
    pub fn resolve_admission_type(&self, value: &str) -> Option<AdmissionTypeId> {
        let trimmed = value.trim();
        if let Ok(id) = trimmed.parse::<u32>() {
            let id = AdmissionTypeId(id);
            return self.admission_types.contains(&id).then_some(id);
        }
        self.admission_types
            .iter()
            .copied()
            .find(|id| id.label().eq_ignore_ascii_case(trimmed))
    }
}

/// Admissible values per dimension.
///
/// A row passes when each of its three values is a member of the matching
/// set. An empty set therefore excludes every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub age_groups: BTreeSet<String>,
    pub genders: BTreeSet<String>,
    pub admission_types: BTreeSet<AdmissionTypeId>,
}

impl FilterSelection {
    /// Every observed value selected ("Select All").
    pub fn all(options: &FilterOptions) -> Self {
        Self {
            age_groups: options.age_groups.clone(),
            genders: options.genders.clone(),
            admission_types: options.admission_types.clone(),
        }
    }

    /// Build a selection from optional user choices. `None` selects every
    /// value of that dimension; values outside the universe are rejected.
    pub fn from_choices(
        options: &FilterOptions,
        age_groups: Option<&[String]>,
        genders: Option<&[String]>,
        admission_types: Option<&[String]>,
    ) -> Result<Self> {
        let mut selection = Self::all(options);
        if let Some(values) = age_groups {
            selection.age_groups = pick(&options.age_groups, values, Dimension::AgeGroup)?;
        }
        if let Some(values) = genders {
            selection.genders = pick(&options.genders, values, Dimension::Gender)?;
        }
        if let Some(values) = admission_types {
            let mut picked = BTreeSet::new();
            for value in values {
                let id = options.resolve_admission_type(value).ok_or_else(|| {
                    ModelError::UnknownFilterValue {
                        dimension: Dimension::AdmissionType,
                        value: value.clone(),
                    }
                })?;
                picked.insert(id);
            }
            selection.admission_types = picked;
        }
        Ok(selection)
    }

    /// Back to the all-values selection.
    pub fn reset(&mut self, options: &FilterOptions) {
        *self = Self::all(options);
    }

    pub fn with_age_groups<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.age_groups = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_genders<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genders = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_admission_types<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = AdmissionTypeId>,
    {
        self.admission_types = values.into_iter().collect();
        self
    }

    /// True when `encounter` is admitted on every dimension.
    pub fn matches(&self, encounter: &Encounter) -> bool {
        self.age_groups.contains(&encounter.age_group)
            && self.genders.contains(&encounter.gender)
            && self.admission_types.contains(&encounter.admission_type_id)
    }

    /// True when some dimension has nothing selected.
    pub fn excludes_everything(&self) -> bool {
        self.age_groups.is_empty() || self.genders.is_empty() || self.admission_types.is_empty()
    }
}

fn pick(
    universe: &BTreeSet<String>,
    values: &[String],
    dimension: Dimension,
) -> Result<BTreeSet<String>> {
    let mut picked = BTreeSet::new();
    for value in values {
        let trimmed = value.trim();
        // Exact match first, then a case-insensitive one.
        let found = universe
            .get(trimmed)
            .or_else(|| universe.iter().find(|known| known.eq_ignore_ascii_case(trimmed)));
        match found {
            Some(known) => {
                picked.insert(known.clone());
            }
            None => {
                return Err(ModelError::UnknownFilterValue {
                    dimension,
                    value: value.clone(),
                });
            }
        }
    }
    Ok(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encounter::Readmitted;

    fn encounter(age: &str, gender: &str, admission: u32) -> Encounter {
        Encounter {
            row: 0,
            encounter_id: "1".to_string(),
            patient_nbr: "1".to_string(),
            age_group: age.to_string(),
            gender: gender.to_string(),
            admission_type_id: AdmissionTypeId(admission),
            time_in_hospital: 1,
            num_medications: Some(1.0),
            readmitted: Readmitted::No,
        }
    }

    fn options() -> FilterOptions {
        let rows = [
            encounter("[70-80)", "Female", 1),
            encounter("[50-60)", "Male", 3),
            encounter("[70-80)", "Male", 2),
        ];
        FilterOptions::from_encounters(&rows)
    }

    #[test]
    fn options_collect_distinct_values() {
        let options = options();
        assert_eq!(options.age_groups.len(), 2);
        assert_eq!(options.genders.len(), 2);
        assert_eq!(options.admission_types.len(), 3);
    }

    #[test]
    fn choices_default_to_all() {
        let options = options();
        let selection = FilterSelection::from_choices(&options, None, None, None).unwrap();
        assert_eq!(selection, FilterSelection::all(&options));
    }

    #[test]
    fn choices_accept_labels_and_ids() {
        let options = options();
        let admission = vec!["emergency".to_string(), "3".to_string()];
        let genders = vec!["male".to_string()];
        let selection =
            FilterSelection::from_choices(&options, None, Some(&genders), Some(&admission))
                .unwrap();
        assert_eq!(
            selection.admission_types,
            BTreeSet::from([AdmissionTypeId(1), AdmissionTypeId(3)])
        );
        assert_eq!(selection.genders, BTreeSet::from(["Male".to_string()]));
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let options = options();
        let ages = vec!["[10-20)".to_string()];
        let err = FilterSelection::from_choices(&options, Some(&ages), None, None).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownFilterValue {
                dimension: Dimension::AgeGroup,
                value: "[10-20)".to_string()
            }
        );
        let admission = vec!["9".to_string()];
        assert!(FilterSelection::from_choices(&options, None, None, Some(&admission)).is_err());
    }

    #[test]
    fn empty_choice_excludes_everything() {
        let options = options();
        let none: Vec<String> = Vec::new();
        let selection =
            FilterSelection::from_choices(&options, None, Some(&none), None).unwrap();
        assert!(selection.excludes_everything());
        assert!(!selection.matches(&encounter("[70-80)", "Female", 1)));
    }

    #[test]
    fn reset_restores_all_values() {
        let options = options();
        let mut selection = FilterSelection::all(&options).with_genders(["Female"]);
        selection.reset(&options);
        assert_eq!(selection, FilterSelection::all(&options));
    }
}
