//! Inpatient encounter records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::admission::admission_type_label;
use crate::error::ModelError;

/// Medication count at or above which an encounter counts as polypharmacy.
pub const POLYPHARMACY_THRESHOLD: f64 = 10.0;

/// Readmission outcome of an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Readmitted {
    /// Readmitted within 30 days (`<30`).
    #[serde(rename = "<30")]
    Within30,
    /// Readmitted after more than 30 days (`>30`).
    #[serde(rename = ">30")]
    After30,
    /// Not readmitted (`NO`).
    #[serde(rename = "NO")]
    No,
}

impl Readmitted {
    pub const ALL: [Readmitted; 3] = [Readmitted::Within30, Readmitted::After30, Readmitted::No];

    /// Source code as it appears in the dataset.
    pub fn code(self) -> &'static str {
        match self {
            Readmitted::Within30 => "<30",
            Readmitted::After30 => ">30",
            Readmitted::No => "NO",
        }
    }

    /// Display label used in breakdown charts.
    pub fn label(self) -> &'static str {
        match self {
            Readmitted::Within30 => "<30 Days",
            Readmitted::After30 => ">30 Days",
            Readmitted::No => "No Readmission",
        }
    }

    /// True for `<30` and `>30`.
    pub fn is_readmitted(self) -> bool {
        !matches!(self, Readmitted::No)
    }
}

impl FromStr for Readmitted {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "<30" => Ok(Readmitted::Within30),
            ">30" => Ok(Readmitted::After30),
            _ if trimmed.eq_ignore_ascii_case("NO") => Ok(Readmitted::No),
            _ => Err(ModelError::UnknownReadmission(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Readmitted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Admission type code (1-9 in the source data, not all mapped to a label).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AdmissionTypeId(pub u32);

impl AdmissionTypeId {
    /// Human label, or the bare number when the id is not in the label map.
    pub fn label(self) -> String {
        admission_type_label(self.0).map_or_else(|| self.0.to_string(), str::to_string)
    }
}

impl fmt::Display for AdmissionTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One inpatient encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    /// Zero-based index of the source row in the raw table.
    pub row: usize,
    pub encounter_id: String,
    pub patient_nbr: String,
    pub age_group: String,
    pub gender: String,
    pub admission_type_id: AdmissionTypeId,
    /// Length of stay in days.
    pub time_in_hospital: u32,
    /// `None` when the source value was missing or not numeric.
    pub num_medications: Option<f64>,
    pub readmitted: Readmitted,
}

impl Encounter {
    /// Ten or more medications. Missing counts are never polypharmacy.
    pub fn is_polypharmacy(&self) -> bool {
        self.num_medications
            .is_some_and(|count| count >= POLYPHARMACY_THRESHOLD)
    }

    /// Readmitted within 30 days.
    pub fn is_readmitted_30(&self) -> bool {
        self.readmitted == Readmitted::Within30
    }

    /// Readmitted at any point (`<30` or `>30`).
    pub fn is_readmitted(&self) -> bool {
        self.readmitted.is_readmitted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encounter(num_medications: Option<f64>, readmitted: Readmitted) -> Encounter {
        Encounter {
            row: 0,
            encounter_id: "1".to_string(),
            patient_nbr: "10".to_string(),
            age_group: "[70-80)".to_string(),
            gender: "Female".to_string(),
            admission_type_id: AdmissionTypeId(1),
            time_in_hospital: 3,
            num_medications,
            readmitted,
        }
    }

    #[test]
    fn parses_readmission_codes() {
        assert_eq!("<30".parse::<Readmitted>(), Ok(Readmitted::Within30));
        assert_eq!(" >30 ".parse::<Readmitted>(), Ok(Readmitted::After30));
        assert_eq!("no".parse::<Readmitted>(), Ok(Readmitted::No));
        assert_eq!(
            "YES".parse::<Readmitted>(),
            Err(ModelError::UnknownReadmission("YES".to_string()))
        );
    }

    #[test]
    fn polypharmacy_threshold_is_inclusive() {
        assert!(encounter(Some(10.0), Readmitted::No).is_polypharmacy());
        assert!(!encounter(Some(9.0), Readmitted::No).is_polypharmacy());
        assert!(!encounter(None, Readmitted::No).is_polypharmacy());
    }

    #[test]
    fn readmission_flags() {
        let within = encounter(None, Readmitted::Within30);
        assert!(within.is_readmitted_30());
        assert!(within.is_readmitted());
        let after = encounter(None, Readmitted::After30);
        assert!(!after.is_readmitted_30());
        assert!(after.is_readmitted());
        assert!(!encounter(None, Readmitted::No).is_readmitted());
    }

    #[test]
    fn admission_type_falls_back_to_number() {
        assert_eq!(AdmissionTypeId(1).label(), "Emergency");
        assert_eq!(AdmissionTypeId(42).label(), "42");
    }
}
