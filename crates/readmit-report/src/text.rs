//! Short plain-text KPI report.

use chrono::NaiveDateTime;

use readmit_common::format_fixed;
use readmit_model::KpiSummary;

pub const REPORT_TITLE: &str = "Diabetes Care Performance Report";

/// Render the KPI report stamped with `generated_at` (minute precision).
pub fn kpi_text_report(kpis: &KpiSummary, generated_at: NaiveDateTime) -> String {
    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&format!(
        "Generated: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M")
    ));
    out.push_str("Key Performance Indicators\n");
    out.push_str(&format!(
        "  30-Day Readmission Rate: {}%\n",
        format_fixed(kpis.readmission_rate, 1)
    ));
    out.push_str(&format!(
        "  Average LOS (readmitted): {} days\n",
        format_fixed(kpis.avg_los_readmitted, 1)
    ));
    out.push_str(&format!(
        "  Polypharmacy (≥10 meds, readmitted): {}%\n",
        format_fixed(kpis.polypharmacy_rate, 1)
    ));
    out.push_str(&format!("  Filtered Encounters: {}\n", kpis.encounter_count));
    out.push_str(&format!(
        "  Filtered Readmitted Encounters: {}\n",
        kpis.readmitted_count
    ));
    out
}
