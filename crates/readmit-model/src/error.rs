use thiserror::Error;

use crate::filter::Dimension;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("unknown readmission outcome {0:?} (expected <30, >30 or NO)")]
    UnknownReadmission(String),
    #[error("{value:?} is not a {dimension} present in the dataset")]
    UnknownFilterValue { dimension: Dimension, value: String },
    #[error("invalid bin spec: {0}")]
    InvalidBinSpec(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
