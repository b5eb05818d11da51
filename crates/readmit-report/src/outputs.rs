//! Write every export of one filtered subset into a directory.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use readmit_ingest::CsvTable;
use readmit_model::{Encounter, KpiSummary};

use crate::csv_export::write_filtered_csv;
use crate::error::{ReportError, Result};
use crate::summary::kpi_summary_rows;
use crate::text::kpi_text_report;
use crate::workbook::write_kpi_workbook;

pub const FILTERED_CSV_NAME: &str = "filtered_data.csv";
pub const KPI_WORKBOOK_NAME: &str = "kpi_summary.xml";
pub const KPI_REPORT_NAME: &str = "kpi_report.txt";

/// Paths of the files written by [`write_export_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutputs {
    pub filtered_csv: PathBuf,
    pub kpi_workbook: PathBuf,
    pub kpi_report: PathBuf,
}

impl ExportOutputs {
    pub fn paths(&self) -> [&Path; 3] {
        [
            self.filtered_csv.as_path(),
            self.kpi_workbook.as_path(),
            self.kpi_report.as_path(),
        ]
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Write the filtered CSV, the KPI workbook and the text report into
/// `output_dir`, creating it if needed. Existing files are overwritten.
pub fn write_export_outputs(
    output_dir: &Path,
    table: &CsvTable,
    subset: &[&Encounter],
    kpis: &KpiSummary,
    generated_at: NaiveDateTime,
) -> Result<ExportOutputs> {
    fs::create_dir_all(output_dir).map_err(|source| ReportError::Create {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let outputs = ExportOutputs {
        filtered_csv: output_dir.join(FILTERED_CSV_NAME),
        kpi_workbook: output_dir.join(KPI_WORKBOOK_NAME),
        kpi_report: output_dir.join(KPI_REPORT_NAME),
    };

    let rows = write_filtered_csv(create(&outputs.filtered_csv)?, table, subset)?;
    info!(path = %outputs.filtered_csv.display(), rows, "filtered data written");

    write_kpi_workbook(create(&outputs.kpi_workbook)?, &kpi_summary_rows(kpis))?;
    info!(path = %outputs.kpi_workbook.display(), "kpi summary written");

    fs::write(&outputs.kpi_report, kpi_text_report(kpis, generated_at)).map_err(|source| {
        ReportError::Create {
            path: outputs.kpi_report.clone(),
            source,
        }
    })?;
    info!(path = %outputs.kpi_report.display(), "kpi report written");

    Ok(outputs)
}
