//! Exports for readmission analytics.
//!
//! - **Filtered data**: CSV of every source column for the filtered rows
//! - **KPI summary**: single-sheet XML Spreadsheet 2003 workbook
//! - **KPI report**: short plain-text document

mod csv_export;
mod error;
mod outputs;
mod summary;
mod text;
mod workbook;

pub use csv_export::write_filtered_csv;
pub use error::{ReportError, Result};
pub use outputs::{
    ExportOutputs, FILTERED_CSV_NAME, KPI_REPORT_NAME, KPI_WORKBOOK_NAME, write_export_outputs,
};
pub use summary::{KpiRow, KpiValue, kpi_summary_rows};
pub use text::{REPORT_TITLE, kpi_text_report};
pub use workbook::{KPI_SHEET_NAME, SPREADSHEET_NS, write_kpi_workbook};
