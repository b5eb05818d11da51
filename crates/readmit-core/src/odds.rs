//! Polypharmacy vs 30-day readmission odds ratio.

use tracing::debug;

use readmit_common::round_to;
use readmit_model::{ContingencyTable, Encounter, OddsRatio};

/// Substitute for a zero cell when computing the ratio.
pub const ZERO_CELL_CORRECTION: f64 = 0.5;

/// Cross polypharmacy (10+ medications) with readmission within 30 days.
pub fn contingency_table(subset: &[&Encounter]) -> ContingencyTable {
    let mut table = ContingencyTable::default();
    for encounter in subset {
        match (encounter.is_polypharmacy(), encounter.is_readmitted_30()) {
            (true, true) => table.a += 1,
            (true, false) => table.b += 1,
            (false, true) => table.c += 1,
            (false, false) => table.d += 1,
        }
    }
    table
}

fn corrected(count: usize) -> f64 {
    if count == 0 {
        ZERO_CELL_CORRECTION
    } else {
        count as f64
    }
}

/// `(a * d) / (b * c)` with zero cells replaced by 0.5, rounded to 2
/// decimals. The returned table keeps the raw counts.
pub fn odds_ratio_from_table(table: ContingencyTable) -> f64 {
    let ratio = (corrected(table.a) * corrected(table.d)) / (corrected(table.b) * corrected(table.c));
    round_to(ratio, 2)
}

/// Odds ratio of a subset, or `None` when the subset is empty.
pub fn odds_ratio(subset: &[&Encounter]) -> Option<OddsRatio> {
    if subset.is_empty() {
        debug!("odds ratio skipped, insufficient data");
        return None;
    }
    let table = contingency_table(subset);
    let odds_ratio = odds_ratio_from_table(table);
    debug!(
        a = table.a,
        b = table.b,
        c = table.c,
        d = table.d,
        odds_ratio,
        "odds ratio computed"
    );
    Some(OddsRatio { table, odds_ratio })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{encounter, refs};
    use readmit_model::Readmitted;

    #[test]
    fn zero_cells_use_half() {
        let table = ContingencyTable {
            a: 0,
            b: 5,
            c: 5,
            d: 0,
        };
        assert_eq!(odds_ratio_from_table(table), 0.01);
    }

    #[test]
    fn all_zero_table_is_one() {
        assert_eq!(odds_ratio_from_table(ContingencyTable::default()), 1.0);
    }

    #[test]
    fn plain_ratio_is_rounded() {
        let table = ContingencyTable {
            a: 2,
            b: 3,
            c: 7,
            d: 11,
        };
        // 22 / 21 = 1.0476...
        assert_eq!(odds_ratio_from_table(table), 1.05);
    }

    #[test]
    fn exact_tie_rounds_to_even() {
        let table = ContingencyTable {
            a: 1,
            b: 8,
            c: 1,
            d: 1,
        };
        // 1 / 8 = 0.125
        assert_eq!(odds_ratio_from_table(table), 0.12);
    }

    #[test]
    fn cells_follow_flags_and_keep_raw_counts() {
        let rows = vec![
            encounter("[70-80)", "Male", 1, 3, Some(12.0), Readmitted::Within30),
            encounter("[70-80)", "Male", 1, 3, Some(12.0), Readmitted::After30),
            encounter("[70-80)", "Male", 1, 3, Some(3.0), Readmitted::Within30),
            encounter("[70-80)", "Male", 1, 3, None, Readmitted::Within30),
            encounter("[70-80)", "Male", 1, 3, Some(2.0), Readmitted::No),
        ];
        let result = odds_ratio(&refs(&rows)).expect("non-empty subset");
        assert_eq!(
            result.table,
            ContingencyTable {
                a: 1,
                b: 1,
                c: 2,
                d: 1
            }
        );
        assert_eq!(result.table.total(), 5);
        assert_eq!(result.odds_ratio, 0.5);
    }

    #[test]
    fn empty_subset_is_insufficient_data() {
        assert_eq!(odds_ratio(&[]), None);
    }
}
