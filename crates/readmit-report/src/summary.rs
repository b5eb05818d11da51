//! Metric/value rows of the KPI summary export.

use std::fmt;

use serde::Serialize;

use readmit_common::format_fixed;
use readmit_model::KpiSummary;

/// Value cell of a summary row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum KpiValue {
    /// Rendered as `"{value} %"` and written as text.
    Percent(f64),
    /// Plain number, written as a numeric cell.
    Number(f64),
    Count(usize),
}

impl fmt::Display for KpiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KpiValue::Percent(value) => write!(f, "{} %", format_fixed(*value, 1)),
            KpiValue::Number(value) => f.write_str(&format_fixed(*value, 1)),
            KpiValue::Count(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiRow {
    pub metric: &'static str,
    pub value: KpiValue,
}

/// The five rows of the KPI summary sheet.
pub fn kpi_summary_rows(kpis: &KpiSummary) -> Vec<KpiRow> {
    vec![
        KpiRow {
            metric: "30-Day Readmission Rate (<30 / all encounters)",
            value: KpiValue::Percent(kpis.readmission_rate),
        },
        KpiRow {
            metric: "Average LOS (days, readmitted only)",
            value: KpiValue::Number(kpis.avg_los_readmitted),
        },
        KpiRow {
            metric: "Polypharmacy (≥10 meds, readmitted only)",
            value: KpiValue::Percent(kpis.polypharmacy_rate),
        },
        KpiRow {
            metric: "Filtered Encounters",
            value: KpiValue::Count(kpis.encounter_count),
        },
        KpiRow {
            metric: "Filtered Readmitted Encounters",
            value: KpiValue::Count(kpis.readmitted_count),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_render_like_the_sheet() {
        let rows = kpi_summary_rows(&KpiSummary {
            readmission_rate: 30.0,
            avg_los_readmitted: 4.3,
            polypharmacy_rate: 33.3,
            encounter_count: 10,
            readmitted_count: 5,
        });
        let rendered: Vec<(&str, String)> = rows
            .iter()
            .map(|row| (row.metric, row.value.to_string()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("30-Day Readmission Rate (<30 / all encounters)", "30.0 %".to_string()),
                ("Average LOS (days, readmitted only)", "4.3".to_string()),
                ("Polypharmacy (≥10 meds, readmitted only)", "33.3 %".to_string()),
                ("Filtered Encounters", "10".to_string()),
                ("Filtered Readmitted Encounters", "5".to_string()),
            ]
        );
    }
}
