//! Plain-language reading of the headline KPIs.

use std::fmt;

use serde::Serialize;

use readmit_model::KpiSummary;

/// Whether a KPI sits on the good side of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Good,
    Attention,
}

impl Status {
    fn from_flag(good: bool) -> Self {
        if good { Status::Good } else { Status::Attention }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Good => "good",
            Status::Attention => "attention",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified KPI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub metric: &'static str,
    pub value: f64,
    pub level: &'static str,
    pub status: Status,
}

/// 30-day readmission rate, in percent.
pub fn readmission_level(rate: f64) -> &'static str {
    if rate >= 12.0 {
        "elevated"
    } else if rate >= 8.0 {
        "moderate"
    } else {
        "relatively low"
    }
}

/// Average length of stay, in days.
pub fn length_of_stay_level(days: f64) -> &'static str {
    if days > 5.0 {
        "high"
    } else if days >= 3.5 {
        "moderate"
    } else {
        "short"
    }
}

/// Polypharmacy rate, in percent.
pub fn polypharmacy_level(rate: f64) -> &'static str {
    if rate >= 80.0 {
        "very high"
    } else if rate >= 60.0 {
        "elevated"
    } else {
        "moderate"
    }
}

/// Readmission, length of stay and polypharmacy insights, in that order.
pub fn insights(kpis: &KpiSummary) -> [Insight; 3] {
    [
        Insight {
            metric: "30-day readmission rate",
            value: kpis.readmission_rate,
            level: readmission_level(kpis.readmission_rate),
            status: Status::from_flag(kpis.readmission_rate < 12.0),
        },
        Insight {
            metric: "average length of stay",
            value: kpis.avg_los_readmitted,
            level: length_of_stay_level(kpis.avg_los_readmitted),
            status: Status::from_flag(kpis.avg_los_readmitted <= 5.0),
        },
        Insight {
            metric: "polypharmacy rate",
            value: kpis.polypharmacy_rate,
            level: polypharmacy_level(kpis.polypharmacy_rate),
            status: Status::from_flag(kpis.polypharmacy_rate < 75.0),
        },
    ]
}
