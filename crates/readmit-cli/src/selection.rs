//! Translate filter flags into a [`FilterSelection`].

use anyhow::{Context, Result};

use readmit_model::{FilterOptions, FilterSelection};

/// Flags given for one filter dimension.
///
/// No values means every value, unless `none` asks for an empty selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionFlag<'a> {
    pub values: &'a [String],
    pub none: bool,
}

impl<'a> DimensionFlag<'a> {
    pub fn values(values: &'a [String]) -> Self {
        Self {
            values,
            none: false,
        }
    }

    pub fn none() -> Self {
        Self {
            values: &[],
            none: true,
        }
    }

    fn choice(self) -> Option<&'a [String]> {
        if self.none {
            Some(&[])
        } else if self.values.is_empty() {
            None
        } else {
            Some(self.values)
        }
    }
}

pub fn selection_from_flags(
    options: &FilterOptions,
    age: DimensionFlag<'_>,
    gender: DimensionFlag<'_>,
    admission_type: DimensionFlag<'_>,
) -> Result<FilterSelection> {
    FilterSelection::from_choices(
        options,
        age.choice(),
        gender.choice(),
        admission_type.choice(),
    )
    .context("invalid filter value (run `readmit filters` to list valid values)")
}
