use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, info, info_span, trace, warn};

use readmit_cli::logging::redact_value;
use readmit_cli::selection::selection_from_flags;
use readmit_cli::summary::{
    encounter_table, filter_options_table, group_rate_table, histogram_table, print_dashboard,
};
use readmit_core::{
    Dashboard, compute_kpis, filter, histogram, patient_encounters, readmission_by_age_group,
    readmitted_patients, search,
};
use readmit_ingest::{Dataset, load_dataset_with_options};
use readmit_model::{Encounter, FilterSelection};
use readmit_report::write_export_outputs;

use crate::cli::{DataArgs, ExploreArgs, ExportArgs, SourceArgs};

/// Upper bound on exploratory length-of-stay bins.
const LOS_HISTOGRAM_BINS: usize = 20;
/// Upper bound on exploratory medication-count bins.
const MEDICATION_HISTOGRAM_BINS: usize = 30;

fn load(source: &SourceArgs) -> Result<Dataset> {
    load_dataset_with_options(&source.data, &source.ingest_options())
        .with_context(|| format!("load {}", source.data.display()))
}

fn load_with_selection(args: &DataArgs) -> Result<(Dataset, FilterSelection)> {
    let dataset = load(&args.source)?;
    let selection = selection_from_flags(
        dataset.filter_options(),
        args.filters.age(),
        args.filters.gender(),
        args.filters.admission_type(),
    )?;
    Ok((dataset, selection))
}

fn warn_if_empty(subset: &[&Encounter]) {
    if subset.is_empty() {
        warn!("no encounters match the selected filters");
    }
}

pub fn run_overview(args: &DataArgs) -> Result<()> {
    let span = info_span!("overview");
    let _guard = span.enter();
    let (dataset, selection) = load_with_selection(args)?;
    let dashboard = Dashboard::compute(dataset.encounters(), &selection);
    warn_if_empty(&dashboard.subset);
    println!("Dataset: {}", args.source.data.display());
    println!(
        "Encounters: {} of {}",
        dashboard.subset.len(),
        dataset.len()
    );
    println!();
    print_dashboard(&dashboard);
    Ok(())
}

pub fn run_eda(args: &DataArgs) -> Result<()> {
    let span = info_span!("eda");
    let _guard = span.enter();
    let (dataset, selection) = load_with_selection(args)?;
    let subset = filter(dataset.encounters(), &selection);
    warn_if_empty(&subset);

    let stays = histogram(
        subset.iter().map(|e| f64::from(e.time_in_hospital)),
        LOS_HISTOGRAM_BINS,
    );
    let medications = histogram(
        subset.iter().filter_map(|e| e.num_medications),
        MEDICATION_HISTOGRAM_BINS,
    );
    let by_age = readmission_by_age_group(&subset);
    debug!(
        los_bins = stays.len(),
        medication_bins = medications.len(),
        age_groups = by_age.len(),
        "eda computed"
    );

    println!("Encounters: {} of {}", subset.len(), dataset.len());
    println!();
    println!("Length of stay:");
    println!("{}", histogram_table("Days", &stays));
    println!();
    println!("Number of medications:");
    println!("{}", histogram_table("Medications", &medications));
    println!();
    println!("30-day readmission rate by age group:");
    println!("{}", group_rate_table(&by_age));
    Ok(())
}

pub fn run_explore(args: &ExploreArgs) -> Result<()> {
    let span = info_span!("explore");
    let _guard = span.enter();
    let (dataset, selection) = load_with_selection(&args.data)?;
    let subset = filter(dataset.encounters(), &selection);
    warn_if_empty(&subset);

    let rows = match &args.search {
        Some(needle) => search(dataset.table(), &subset, needle),
        None => subset.clone(),
    };
    println!("Rows: {} of {} filtered encounters", rows.len(), subset.len());
    println!("{}", encounter_table(&rows, args.limit));
    if rows.len() > args.limit {
        println!("(showing first {} rows)", args.limit);
    }
    println!();

    let kpis = compute_kpis(&subset);
    match &args.patient {
        Some(patient) => {
            trace!(patient = redact_value(patient), "patient lookup");
            let encounters = patient_encounters(&kpis, patient);
            if encounters.is_empty() {
                println!("No readmitted encounters for patient {patient}.");
            } else {
                println!("Readmitted encounters for patient {patient}:");
                println!("{}", encounter_table(&encounters, encounters.len()));
            }
        }
        None => {
            let patients = readmitted_patients(&kpis);
            println!("Readmitted patients: {}", patients.len());
            for patient in patients.iter().take(args.limit) {
                println!("  {patient}");
            }
            if patients.len() > args.limit {
                println!("  ... {} more (use --patient NBR)", patients.len() - args.limit);
            }
        }
    }
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let span = info_span!("export", out_dir = %args.out_dir.display());
    let _guard = span.enter();
    let (dataset, selection) = load_with_selection(&args.data)?;
    let subset = filter(dataset.encounters(), &selection);
    warn_if_empty(&subset);
    let kpis = compute_kpis(&subset).summary();
    let rows = match &args.search {
        Some(needle) => search(dataset.table(), &subset, needle),
        None => subset.clone(),
    };

    let outputs = write_export_outputs(
        &args.out_dir,
        dataset.table(),
        &rows,
        &kpis,
        Local::now().naive_local(),
    )
    .with_context(|| format!("export to {}", args.out_dir.display()))?;
    info!(rows = rows.len(), filtered = subset.len(), "export complete");
    for path in outputs.paths() {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

pub fn run_filters(args: &SourceArgs) -> Result<()> {
    let span = info_span!("filters");
    let _guard = span.enter();
    let dataset = load(args)?;
    println!("{}", filter_options_table(dataset.filter_options()));
    Ok(())
}
