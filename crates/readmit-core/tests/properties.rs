use proptest::prelude::*;

use readmit_core::{
    bin_distribution, compute_kpis, contingency_table, filter, odds_ratio_from_table,
};
use readmit_model::{
    AdmissionTypeId, BinSpec, ContingencyTable, Encounter, FilterOptions, FilterSelection,
    Readmitted,
};

const AGES: [&str; 4] = ["[40-50)", "[50-60)", "[60-70)", "[70-80)"];
const GENDERS: [&str; 3] = ["Female", "Male", "Unknown/Invalid"];
const ADMISSION_TYPES: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

fn kept<T: Copy>(values: &[T], keep: &[bool]) -> Vec<T> {
    values
        .iter()
        .zip(keep)
        .filter(|(_, keep)| **keep)
        .map(|(value, _)| *value)
        .collect()
}

fn readmitted() -> impl Strategy<Value = Readmitted> {
    prop_oneof![
        Just(Readmitted::Within30),
        Just(Readmitted::After30),
        Just(Readmitted::No),
    ]
}

fn encounter() -> impl Strategy<Value = Encounter> {
    (
        0..AGES.len(),
        0..GENDERS.len(),
        0..ADMISSION_TYPES.len(),
        1u32..=14,
        proptest::option::of(0u32..=80),
        readmitted(),
    )
        .prop_map(|(age, gender, admission, los, meds, readmitted)| Encounter {
            row: 0,
            encounter_id: "1".to_string(),
            patient_nbr: "1".to_string(),
            age_group: AGES[age].to_string(),
            gender: GENDERS[gender].to_string(),
            admission_type_id: AdmissionTypeId(ADMISSION_TYPES[admission]),
            time_in_hospital: los,
            num_medications: meds.map(f64::from),
            readmitted,
        })
}

fn encounters() -> impl Strategy<Value = Vec<Encounter>> {
    proptest::collection::vec(encounter(), 0..60)
}

proptest! {
    #[test]
    fn shrinking_a_dimension_never_grows_the_subset(
        rows in encounters(),
        keep_ages in proptest::collection::vec(any::<bool>(), AGES.len()),
        keep_genders in proptest::collection::vec(any::<bool>(), GENDERS.len()),
        keep_admissions in proptest::collection::vec(any::<bool>(), ADMISSION_TYPES.len()),
    ) {
        let options = FilterOptions::from_encounters(&rows);
        let all = FilterSelection::all(&options);
        let by_age = all.clone().with_age_groups(kept(&AGES, &keep_ages));
        let by_gender = by_age.clone().with_genders(kept(&GENDERS, &keep_genders));
        let by_admission = by_gender.clone().with_admission_types(
            kept(&ADMISSION_TYPES, &keep_admissions)
                .into_iter()
                .map(AdmissionTypeId),
        );

        let full = filter(&rows, &all);
        prop_assert_eq!(full.len(), rows.len());
        let mut previous = full.len();
        for selection in [&by_age, &by_gender, &by_admission] {
            let narrowed = filter(&rows, selection);
            prop_assert!(narrowed.len() <= previous);
            prop_assert!(narrowed.iter().all(|e| selection.matches(e)));
            previous = narrowed.len();
        }
    }

    #[test]
    fn rates_are_bounded(rows in encounters()) {
        let subset: Vec<&Encounter> = rows.iter().collect();
        let kpis = compute_kpis(&subset);
        prop_assert!((0.0..=100.0).contains(&kpis.readmission_rate));
        prop_assert!((0.0..=100.0).contains(&kpis.polypharmacy_rate));
        prop_assert!(kpis.avg_los_readmitted >= 0.0);
        if rows.is_empty() {
            prop_assert_eq!(kpis.readmission_rate, 0.0);
            prop_assert_eq!(kpis.polypharmacy_rate, 0.0);
        }
    }

    #[test]
    fn average_stay_matches_readmitted_rows(rows in encounters()) {
        let subset: Vec<&Encounter> = rows.iter().collect();
        let kpis = compute_kpis(&subset);
        let stays: Vec<f64> = rows
            .iter()
            .filter(|e| e.readmitted != Readmitted::No)
            .map(|e| f64::from(e.time_in_hospital))
            .collect();
        let expected = if stays.is_empty() {
            0.0
        } else {
            readmit_common::round_to(stays.iter().sum::<f64>() / stays.len() as f64, 1)
        };
        prop_assert_eq!(kpis.avg_los_readmitted, expected);
    }

    #[test]
    fn contingency_cells_sum_to_subset(rows in encounters()) {
        let subset: Vec<&Encounter> = rows.iter().collect();
        prop_assert_eq!(contingency_table(&subset).total(), rows.len());
    }

    #[test]
    fn odds_ratio_is_scale_invariant(
        a in 1usize..50,
        b in 1usize..50,
        c in 1usize..50,
        d in 1usize..50,
        k in 2usize..10,
    ) {
        let base = odds_ratio_from_table(ContingencyTable { a, b, c, d });
        let scaled = odds_ratio_from_table(ContingencyTable {
            a: a * k,
            b: b * k,
            c: c * k,
            d: d * k,
        });
        prop_assert_eq!(base, scaled);
    }

    #[test]
    fn binning_is_total_over_range(values in proptest::collection::vec(0.0f64..50.0, 0..100)) {
        let spec = BinSpec::medication_count();
        let bins = bin_distribution(values.iter().copied(), &spec);
        prop_assert_eq!(bins.len(), spec.len());
        prop_assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
    }

    #[test]
    fn binning_never_overcounts(values in proptest::collection::vec(-10.0f64..40.0, 0..100)) {
        let bins = bin_distribution(values.iter().copied(), &BinSpec::length_of_stay());
        prop_assert!(bins.iter().map(|b| b.count).sum::<usize>() <= values.len());
    }
}
