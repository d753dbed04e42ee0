use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Input a positivity check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Steps,
    Duration,
    Weight,
    Height,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Steps => "steps",
            Field::Duration => "duration",
            Field::Weight => "weight",
            Field::Height => "height",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("invalid arguments count: {0}")]
    InvalidArgumentsCount(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("zero or negative value: {field} = {value}")]
    ZeroOrNegativeValue { field: Field, value: String },

    #[error("unknown training type: {0}")]
    UnknownTrainingType(String),
}

impl TrackerError {
    pub(crate) fn non_positive(field: Field, value: impl fmt::Display) -> Self {
        TrackerError::ZeroOrNegativeValue {
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T, E = TrackerError> = std::result::Result<T, E>;
