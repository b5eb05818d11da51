//! Integration tests for the dashboard tables.

use readmit_cli::selection::{DimensionFlag, selection_from_flags};
use readmit_cli::summary::{
    contingency_table, distribution_table, encounter_table, filter_options_table, kpi_table,
    share_table,
};
use readmit_core::Dashboard;
use readmit_ingest::{CsvTable, Dataset};

fn dataset() -> Dataset {
    let headers = [
        "encounter_id",
        "patient_nbr",
        "gender",
        "age",
        "admission_type_id",
        "time_in_hospital",
        "num_medications",
        "readmitted",
    ];
    let rows = [
        ["1", "100", "Female", "[70-80)", "1", "3", "12", "<30"],
        ["2", "200", "Male", "[50-60)", "2", "5", "4", "NO"],
        ["3", "100", "Female", "[70-80)", "3", "9", "20", ">30"],
        ["4", "300", "Male", "[70-80)", "1", "1", "?", "NO"],
    ];
    let table = CsvTable {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    };
    Dataset::from_table(table).unwrap()
}

#[test]
fn overview_tables_show_computed_values() {
    let dataset = dataset();
    let selection = selection_from_flags(
        dataset.filter_options(),
        DimensionFlag::default(),
        DimensionFlag::default(),
        DimensionFlag::default(),
    )
    .unwrap();
    let dashboard = Dashboard::compute(dataset.encounters(), &selection);

    let kpis = kpi_table(&dashboard.kpis, &dashboard.insights).to_string();
    assert!(kpis.contains("25.0%"));
    assert!(kpis.contains("6.0 days"));
    assert!(kpis.contains("100.0%"));
    assert!(kpis.contains("elevated"));

    let shares = share_table(&dashboard.readmission_breakdown).to_string();
    assert!(shares.contains("No Readmission"));
    assert!(shares.contains("50.0%"));

    let stays = distribution_table("Days", &dashboard.length_of_stay).to_string();
    assert!(stays.contains("1–2"));
    assert!(stays.contains("10+"));

    let odds = dashboard.odds_ratio.expect("non-empty subset");
    assert_eq!(odds.table.total(), 4);
    let cells = contingency_table(&odds).to_string();
    assert!(cells.contains("Polypharmacy"));
}

#[test]
fn filtered_overview_uses_selected_rows() {
    let dataset = dataset();
    let gender = ["Male".to_string()];
    let admission = ["Emergency".to_string()];
    let selection = selection_from_flags(
        dataset.filter_options(),
        DimensionFlag::default(),
        DimensionFlag::values(&gender),
        DimensionFlag::values(&admission),
    )
    .unwrap();
    let dashboard = Dashboard::compute(dataset.encounters(), &selection);
    assert_eq!(dashboard.subset.len(), 1);
    assert_eq!(dashboard.kpis.readmission_rate, 0.0);

    let rows = encounter_table(&dashboard.subset, 10).to_string();
    assert!(rows.contains("Emergency"));
    assert!(rows.contains("300"));
}

#[test]
fn empty_dimension_excludes_every_row() {
    let dataset = dataset();
    let selection = selection_from_flags(
        dataset.filter_options(),
        DimensionFlag::default(),
        DimensionFlag::default(),
        DimensionFlag::none(),
    )
    .unwrap();
    let dashboard = Dashboard::compute(dataset.encounters(), &selection);
    assert!(dashboard.subset.is_empty());
    assert_eq!(dashboard.kpis.readmission_rate, 0.0);
    assert_eq!(dashboard.odds_ratio, None);
}

#[test]
fn filter_listing_includes_labels() {
    let dataset = dataset();
    let listing = filter_options_table(dataset.filter_options()).to_string();
    assert!(listing.contains("[50-60)"));
    assert!(listing.contains("Urgent"));
    assert!(listing.contains("Elective"));
    assert!(listing.contains("--admission-type"));
}
