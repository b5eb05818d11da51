//! Distribution binning.
//!
//! Two flavours: [`bin_distribution`] counts values into a fixed, labelled
//! [`BinSpec`] for the dashboard charts, and [`histogram`] builds equal-width
//! exploratory bins sized from the data.

use readmit_model::{BinCount, BinSpec, Encounter, HistogramBin};

/// Count `values` into the bins of `spec`, in bin-definition order.
///
/// Values outside every bin (including NaN) are dropped. Empty input gives
/// every bin with a zero count.
pub fn bin_distribution<I>(values: I, spec: &BinSpec) -> Vec<BinCount>
where
    I: IntoIterator<Item = f64>,
{
    let mut counts = vec![0usize; spec.len()];
    for value in values {
        if let Some(index) = spec.locate(value) {
            counts[index] += 1;
        }
    }
    spec.bins()
        .iter()
        .zip(counts)
        .map(|(bin, count)| BinCount {
            label: bin.label.clone(),
            count,
        })
        .collect()
}

/// Length-of-stay distribution of a subset.
pub fn length_of_stay_distribution(subset: &[&Encounter]) -> Vec<BinCount> {
    bin_distribution(
        subset.iter().map(|e| f64::from(e.time_in_hospital)),
        &BinSpec::length_of_stay(),
    )
}

/// Medication-count distribution of a subset; missing counts are skipped.
///
/// The dashboard feeds it the readmitted encounters.
pub fn medication_distribution(subset: &[&Encounter]) -> Vec<BinCount> {
    bin_distribution(
        subset.iter().filter_map(|e| e.num_medications),
        &BinSpec::medication_count(),
    )
}

/// Step multipliers tried for each power of ten.
const NICE_STEPS: [f64; 4] = [1.0, 2.0, 2.5, 5.0];

/// Equal-width histogram with at most `max_bins` bins.
///
/// The bin width is a "nice" step (1, 2, 2.5 or 5 times a power of ten) and
/// bin edges are multiples of it. Empty input or `max_bins == 0` gives no
/// bins; non-finite values are ignored.
pub fn histogram<I>(values: I, max_bins: usize) -> Vec<HistogramBin>
where
    I: IntoIterator<Item = f64>,
{
    let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    if values.is_empty() || max_bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let Some((start, step, bin_count)) = nice_layout(min, max, max_bins) else {
        return vec![HistogramBin {
            range: min..max,
            count: values.len(),
        }];
    };

    let mut counts = vec![0usize; bin_count];
    for value in &values {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = ((value - start) / step).floor().max(0.0) as usize;
        counts[index.min(bin_count - 1)] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| {
            let lower = start + step * index as f64;
            HistogramBin {
                range: lower..lower + step,
                count,
            }
        })
        .collect()
}

/// Pick `(start, step, bins)` so that aligned bins of width `step` cover
/// `[min, max]` in at most `max_bins` bins.
fn nice_layout(min: f64, max: f64, max_bins: usize) -> Option<(f64, f64, usize)> {
    if max_bins == 1 {
        return None;
    }
    let span = max - min;
    if span <= 0.0 {
        return Some((min.floor(), 1.0, 1));
    }
    let raw = span / max_bins as f64;
    let mut magnitude = 10f64.powf(raw.log10().floor());
    // Ten decades is far more than any finite span needs.
    for _ in 0..10 {
        for multiplier in NICE_STEPS {
            let step = multiplier * magnitude;
            let first = (min / step).floor();
            let last = (max / step).floor();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let bins = (last - first) as usize + 1;
            if bins <= max_bins {
                return Some((first * step, step, bins));
            }
        }
        magnitude *= 10.0;
    }
    None
}
