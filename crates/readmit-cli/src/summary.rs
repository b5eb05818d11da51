//! Terminal tables for the dashboard views.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use readmit_common::{format_fixed, format_numeric};
use readmit_core::{Dashboard, Insight, KpiSnapshot, Status};
use readmit_model::{
    BinCount, CategoryShare, Encounter, FilterOptions, GroupRate, HistogramBin, OddsRatio,
};

/// Printed in place of the odds ratio when the subset is empty.
pub const INSUFFICIENT_DATA: &str = "Insufficient data to compute odds ratio.";

pub fn print_dashboard(dashboard: &Dashboard<'_>) {
    println!("KPIs:");
    println!("{}", kpi_table(&dashboard.kpis, &dashboard.insights));
    println!();
    println!("Readmission breakdown:");
    println!("{}", share_table(&dashboard.readmission_breakdown));
    println!();
    println!("Length of stay (all filtered encounters):");
    println!("{}", distribution_table("Days", &dashboard.length_of_stay));
    println!();
    println!("Medications (readmitted encounters):");
    println!("{}", distribution_table("Medications", &dashboard.medications));
    println!();
    println!("Polypharmacy vs 30-day readmission:");
    match &dashboard.odds_ratio {
        Some(odds) => {
            println!("{}", contingency_table(odds));
            println!("Odds ratio: {}", format_fixed(odds.odds_ratio, 2));
        }
        None => println!("{INSUFFICIENT_DATA}"),
    }
}

/// Headline KPIs with their level and status.
pub fn kpi_table(kpis: &KpiSnapshot<'_>, insights: &[Insight; 3]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Value"),
        header_cell("Level"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let [readmission, los, poly] = insights;
    table.add_row(vec![
        Cell::new("30-day readmission rate"),
        Cell::new(format!("{}%", format_fixed(kpis.readmission_rate, 1))),
        Cell::new(readmission.level),
        status_cell(readmission.status),
    ]);
    table.add_row(vec![
        Cell::new("Avg length of stay (readmitted)"),
        Cell::new(format!("{} days", format_fixed(kpis.avg_los_readmitted, 1))),
        Cell::new(los.level),
        status_cell(los.status),
    ]);
    table.add_row(vec![
        Cell::new("Polypharmacy rate (≥10 meds, readmitted)"),
        Cell::new(format!("{}%", format_fixed(kpis.polypharmacy_rate, 1))),
        Cell::new(poly.level),
        status_cell(poly.status),
    ]);
    table.add_row(vec![
        Cell::new("Filtered encounters"),
        Cell::new(kpis.encounter_count),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Filtered readmitted encounters"),
        Cell::new(kpis.readmitted_count()),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table
}

pub fn share_table(shares: &[CategoryShare]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Outcome"),
        header_cell("Encounters"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for share in shares {
        table.add_row(vec![
            Cell::new(&share.label),
            Cell::new(share.count),
            Cell::new(format!("{}%", format_fixed(share.percent, 1))),
        ]);
    }
    table
}

pub fn distribution_table(label: &str, bins: &[BinCount]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Encounters")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for bin in bins {
        table.add_row(vec![Cell::new(&bin.label), count_cell(bin.count)]);
    }
    table
}

pub fn histogram_table(label: &str, bins: &[HistogramBin]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Encounters")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for bin in bins {
        let range = format!(
            "{} – {}",
            format_numeric(bin.range.start),
            format_numeric(bin.range.end)
        );
        table.add_row(vec![Cell::new(range), count_cell(bin.count)]);
    }
    table
}

pub fn group_rate_table(rates: &[GroupRate]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Age group"),
        header_cell("Encounters"),
        header_cell("Readmitted <30"),
        header_cell("Rate"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for rate in rates {
        table.add_row(vec![
            Cell::new(&rate.group),
            Cell::new(rate.encounters),
            Cell::new(rate.readmitted_30),
            Cell::new(format!("{}%", format_fixed(rate.rate, 1))),
        ]);
    }
    table
}

/// 2x2 polypharmacy by 30-day readmission counts.
pub fn contingency_table(odds: &OddsRatio) -> Table {
    let cells = odds.table;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Readmitted <30"),
        header_cell("Not readmitted <30"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Polypharmacy (≥10)"),
        Cell::new(cells.a),
        Cell::new(cells.b),
    ]);
    table.add_row(vec![
        Cell::new("No polypharmacy"),
        Cell::new(cells.c),
        Cell::new(cells.d),
    ]);
    table
}

/// Key fields of up to `limit` encounters.
pub fn encounter_table(encounters: &[&Encounter], limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Encounter"),
        header_cell("Patient"),
        header_cell("Age"),
        header_cell("Gender"),
        header_cell("Admission type"),
        header_cell("LOS"),
        header_cell("Meds"),
        header_cell("Readmitted"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for encounter in encounters.iter().take(limit) {
        let meds = match encounter.num_medications {
            Some(count) => Cell::new(format_numeric(count)),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&encounter.encounter_id),
            Cell::new(&encounter.patient_nbr),
            Cell::new(&encounter.age_group),
            Cell::new(&encounter.gender),
            Cell::new(encounter.admission_type_id.label()),
            Cell::new(encounter.time_in_hospital),
            meds,
            Cell::new(encounter.readmitted.code()),
        ]);
    }
    table
}

/// Filter universe, one row per dimension value.
pub fn filter_options_table(options: &FilterOptions) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Filter"),
        header_cell("Flag value"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    for age in &options.age_groups {
        table.add_row(vec![Cell::new("--age"), Cell::new(age), dim_cell("-")]);
    }
    for gender in &options.genders {
        table.add_row(vec![Cell::new("--gender"), Cell::new(gender), dim_cell("-")]);
    }
    for id in &options.admission_types {
        table.add_row(vec![
            Cell::new("--admission-type"),
            Cell::new(id),
            Cell::new(id.label()),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: Status) -> Cell {
    match status {
        Status::Good => Cell::new("good").fg(Color::Green),
        Status::Attention => Cell::new("attention")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
