//! The loaded encounter snapshot.
//!
//! A [`Dataset`] is built once per session and never mutated. It keeps the
//! raw text table (for exports and search across every source column) next
//! to the typed encounters the analytics run on.

use std::path::Path;

use tracing::{debug, info, warn};

use readmit_common::{parse_f64, parse_u32};
use readmit_model::{AdmissionTypeId, Encounter, FilterOptions, Readmitted};

use crate::csv_table::CsvTable;
use crate::error::{IngestError, Result};
use crate::streaming::{IngestOptions, read_csv_table_auto_with_options};

pub const ENCOUNTER_ID: &str = "encounter_id";
pub const PATIENT_NBR: &str = "patient_nbr";
pub const AGE: &str = "age";
pub const GENDER: &str = "gender";
pub const ADMISSION_TYPE_ID: &str = "admission_type_id";
pub const TIME_IN_HOSPITAL: &str = "time_in_hospital";
pub const NUM_MEDICATIONS: &str = "num_medications";
pub const READMITTED: &str = "readmitted";

/// Columns the loader cannot do without, in the order they are checked.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    NUM_MEDICATIONS,
    ENCOUNTER_ID,
    PATIENT_NBR,
    AGE,
    GENDER,
    ADMISSION_TYPE_ID,
    TIME_IN_HOSPITAL,
    READMITTED,
];

#[derive(Debug, Clone, Copy)]
struct ColumnIndexes {
    encounter_id: usize,
    patient_nbr: usize,
    age: usize,
    gender: usize,
    admission_type_id: usize,
    time_in_hospital: usize,
    num_medications: usize,
    readmitted: usize,
}

impl ColumnIndexes {
    fn resolve(table: &CsvTable) -> Result<Self> {
        let find = |column: &str| {
            table
                .column_index(column)
                .ok_or_else(|| IngestError::MissingColumn {
                    column: column.to_string(),
                })
        };
        // Checked in REQUIRED_COLUMNS order so the medication column is
        // reported first when several are missing.
        for column in REQUIRED_COLUMNS {
            find(column)?;
        }
        Ok(Self {
            encounter_id: find(ENCOUNTER_ID)?,
            patient_nbr: find(PATIENT_NBR)?,
            age: find(AGE)?,
            gender: find(GENDER)?,
            admission_type_id: find(ADMISSION_TYPE_ID)?,
            time_in_hospital: find(TIME_IN_HOSPITAL)?,
            num_medications: find(NUM_MEDICATIONS)?,
            readmitted: find(READMITTED)?,
        })
    }
}

/// Immutable encounter snapshot.
#[derive(Debug, Clone)]
pub struct Dataset {
    table: CsvTable,
    encounters: Vec<Encounter>,
    options: FilterOptions,
    coerced_medications: usize,
}

impl Dataset {
    /// Validate the required columns and type every row.
    pub fn from_table(table: CsvTable) -> Result<Self> {
        let columns = ColumnIndexes::resolve(&table)?;
        let mut encounters = Vec::with_capacity(table.rows.len());
        let mut coerced_medications = 0usize;
        for (row, cells) in table.rows.iter().enumerate() {
            let encounter = parse_encounter(row, cells, columns)?;
            if encounter.num_medications.is_none() {
                coerced_medications += 1;
            }
            encounters.push(encounter);
        }
        if coerced_medications > 0 {
            warn!(
                count = coerced_medications,
                "non-numeric num_medications values treated as missing"
            );
        }
        let options = FilterOptions::from_encounters(&encounters);
        debug!(
            age_groups = options.age_groups.len(),
            genders = options.genders.len(),
            admission_types = options.admission_types.len(),
            "filter universe built"
        );
        Ok(Self {
            table,
            encounters,
            options,
            coerced_medications,
        })
    }

    pub fn table(&self) -> &CsvTable {
        &self.table
    }

    pub fn encounters(&self) -> &[Encounter] {
        &self.encounters
    }

    /// Distinct values per filter dimension.
    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    /// Rows whose medication count was missing or not numeric.
    pub fn coerced_medication_count(&self) -> usize {
        self.coerced_medications
    }

    pub fn len(&self) -> usize {
        self.encounters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encounters.is_empty()
    }
}

fn parse_encounter(row: usize, cells: &[String], columns: ColumnIndexes) -> Result<Encounter> {
    let cell = |index: usize| cells.get(index).map_or("", String::as_str);
    let invalid = |column: &str, value: &str| IngestError::InvalidValue {
        row: row + 1,
        column: column.to_string(),
        value: value.to_string(),
    };

    let admission_raw = cell(columns.admission_type_id);
    let admission_type_id = parse_u32(admission_raw)
        .map(AdmissionTypeId)
        .ok_or_else(|| invalid(ADMISSION_TYPE_ID, admission_raw))?;

    let los_raw = cell(columns.time_in_hospital);
    let time_in_hospital =
        parse_u32(los_raw).ok_or_else(|| invalid(TIME_IN_HOSPITAL, los_raw))?;

    let readmitted_raw = cell(columns.readmitted);
    let readmitted = readmitted_raw
        .parse::<Readmitted>()
        .map_err(|_| invalid(READMITTED, readmitted_raw))?;

    Ok(Encounter {
        row,
        encounter_id: cell(columns.encounter_id).to_string(),
        patient_nbr: cell(columns.patient_nbr).to_string(),
        age_group: cell(columns.age).to_string(),
        gender: cell(columns.gender).to_string(),
        admission_type_id,
        time_in_hospital,
        num_medications: parse_f64(cell(columns.num_medications)),
        readmitted,
    })
}

/// Load the encounter dataset from a delimited file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    load_dataset_with_options(path, &IngestOptions::default())
}

pub fn load_dataset_with_options(path: &Path, options: &IngestOptions) -> Result<Dataset> {
    let table = read_csv_table_auto_with_options(path, options)?;
    let dataset = Dataset::from_table(table)?;
    info!(
        path = %path.display(),
        encounters = dataset.len(),
        columns = dataset.table().headers.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|v| (*v).to_string()).collect())
                .collect(),
        }
    }

    const HEADERS: [&str; 8] = [
        "encounter_id",
        "patient_nbr",
        "age",
        "gender",
        "admission_type_id",
        "time_in_hospital",
        "num_medications",
        "readmitted",
    ];

    #[test]
    fn types_each_row() {
        let dataset = Dataset::from_table(table(
            &HEADERS,
            &[
                &["1", "10", "[70-80)", "Female", "1", "3", "12", "<30"],
                &["2", "11", "[50-60)", "Male", "9", "5", "?", "NO"],
            ],
        ))
        .unwrap();
        assert_eq!(dataset.len(), 2);
        let first = &dataset.encounters()[0];
        assert_eq!(first.age_group, "[70-80)");
        assert_eq!(first.num_medications, Some(12.0));
        assert_eq!(first.readmitted, Readmitted::Within30);
        let second = &dataset.encounters()[1];
        assert_eq!(second.row, 1);
        assert_eq!(second.num_medications, None);
        assert_eq!(second.admission_type_id, AdmissionTypeId(9));
        assert_eq!(dataset.coerced_medication_count(), 1);
        assert_eq!(dataset.filter_options().genders.len(), 2);
    }

    #[test]
    fn missing_medication_column_is_fatal() {
        let headers: Vec<&str> = HEADERS
            .iter()
            .copied()
            .filter(|h| *h != "num_medications")
            .collect();
        let err = Dataset::from_table(table(&headers, &[])).unwrap_err();
        assert!(
            matches!(err, IngestError::MissingColumn { ref column } if column == "num_medications")
        );
    }

    #[test]
    fn medication_column_reported_before_others() {
        let err = Dataset::from_table(table(&["age"], &[])).unwrap_err();
        assert!(
            matches!(err, IngestError::MissingColumn { ref column } if column == "num_medications")
        );
    }

    #[test]
    fn headers_match_case_insensitively() {
        let upper: Vec<String> = HEADERS.iter().map(|h| h.to_uppercase()).collect();
        let upper: Vec<&str> = upper.iter().map(String::as_str).collect();
        let dataset = Dataset::from_table(table(
            &upper,
            &[&["1", "10", "[0-10)", "Female", "6", "1", "1", "NO"]],
        ))
        .unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn bad_readmission_value_names_row_and_column() {
        let err = Dataset::from_table(table(
            &HEADERS,
            &[&["1", "10", "[0-10)", "Female", "6", "1", "1", "maybe"]],
        ))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid readmitted value 'maybe' on data row 1"
        );
    }

    #[test]
    fn empty_table_is_a_valid_dataset() {
        let dataset = Dataset::from_table(table(&HEADERS, &[])).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.filter_options().age_groups.is_empty());
    }
}
