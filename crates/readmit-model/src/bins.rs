//! Fixed, labelled bin partitions for distribution reporting.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One left-closed, right-open bin with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub label: String,
    pub range: Range<f64>,
}

impl Bin {
    pub fn contains(&self, value: f64) -> bool {
        self.range.contains(&value)
    }
}

/// An ordered partition of part of the real line.
///
/// Ranges are strictly increasing and never overlap. Values outside every
/// range are unbinned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinSpec {
    bins: Vec<Bin>,
}

impl BinSpec {
    pub fn new<I, S>(bins: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Range<f64>)>,
        S: Into<String>,
    {
        let bins: Vec<Bin> = bins
            .into_iter()
            .map(|(label, range)| Bin {
                label: label.into(),
                range,
            })
            .collect();
        for bin in &bins {
            if !(bin.range.start < bin.range.end) {
                return Err(ModelError::InvalidBinSpec(format!(
                    "bin {:?} has an empty range {}..{}",
                    bin.label, bin.range.start, bin.range.end
                )));
            }
        }
        for pair in bins.windows(2) {
            if pair[1].range.start < pair[0].range.end {
                return Err(ModelError::InvalidBinSpec(format!(
                    "bin {:?} overlaps or precedes bin {:?}",
                    pair[1].label, pair[0].label
                )));
            }
        }
        Ok(Self { bins })
    }

    /// Build contiguous bins from `labels.len() + 1` ascending edges.
    pub fn from_edges(edges: &[f64], labels: &[&str]) -> Result<Self> {
        if edges.len() != labels.len() + 1 {
            return Err(ModelError::InvalidBinSpec(format!(
                "{} edges cannot bound {} labels",
                edges.len(),
                labels.len()
            )));
        }
        Self::new(
            labels
                .iter()
                .zip(edges.windows(2))
                .map(|(label, edge)| (*label, edge[0]..edge[1])),
        )
    }

    /// Length-of-stay bins in days.
    pub fn length_of_stay() -> Self {
        Self::fixed(
            &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 20.0],
            &["1–2", "3–4", "5–6", "7–8", "9–10", "10+"],
        )
    }

    /// Medication count bins.
    pub fn medication_count() -> Self {
        Self::fixed(
            &[0.0, 5.0, 10.0, 15.0, 20.0, 30.0, 50.0],
            &["0–4", "5–9", "10–14", "15–19", "20–29", "30+"],
        )
    }

    fn fixed(edges: &[f64], labels: &[&str]) -> Self {
        Self {
            bins: labels
                .iter()
                .zip(edges.windows(2))
                .map(|(label, edge)| Bin {
                    label: (*label).to_string(),
                    range: edge[0]..edge[1],
                })
                .collect(),
        }
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Index of the bin containing `value`, if any.
    pub fn locate(&self, value: f64) -> Option<usize> {
        // Bins are sorted and disjoint, so the first hit is the only one.
        self.bins.iter().position(|bin| bin.contains(value))
    }
}

/// Count of values that fell into one labelled bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinCount {
    pub label: String,
    pub count: usize,
}
