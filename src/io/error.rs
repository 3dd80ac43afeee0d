//! Input error type.

use std::fmt;

use crate::models::{LoadId, PointParseError};

/// Why a load list could not be read.
///
/// Record-level variants carry the 1-based line number of the offending
/// record.
#[derive(Debug)]
pub enum InputError {
    /// The source could not be opened or read.
    Io(std::io::Error),
    /// The source is not valid delimited text.
    Csv(csv::Error),
    /// A record does not have exactly three fields.
    FieldCount {
        /// Line of the record.
        line: u64,
        /// Fields found.
        fields: Vec<String>,
    },
    /// The load number is not an integer.
    InvalidId {
        /// Line of the record.
        line: u64,
        /// Offending field.
        value: String,
    },
    /// The pickup point is not `(x,y)`.
    InvalidPickup {
        /// Line of the record.
        line: u64,
        /// Offending field.
        value: String,
        /// Parse failure.
        source: PointParseError,
    },
    /// The dropoff point is not `(x,y)`.
    InvalidDropoff {
        /// Line of the record.
        line: u64,
        /// Offending field.
        value: String,
        /// Parse failure.
        source: PointParseError,
    },
    /// The load number was already used by an earlier record.
    DuplicateId {
        /// Line of the record.
        line: u64,
        /// Repeated load number.
        id: LoadId,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Csv(err) => write!(f, "{err}"),
            Self::FieldCount { line, fields } => {
                write!(f, "wrong number of fields in line {line}: {fields:?}")
            }
            Self::InvalidId { line, value } => {
                write!(f, "invalid load number in line {line}: {value}")
            }
            Self::InvalidPickup { line, value, .. } => {
                write!(f, "invalid pickup point in line {line}: {value}")
            }
            Self::InvalidDropoff { line, value, .. } => {
                write!(f, "invalid dropoff point in line {line}: {value}")
            }
            Self::DuplicateId { line, id } => {
                write!(f, "duplicate load number in line {line}: {id}")
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
            Self::InvalidPickup { source, .. } | Self::InvalidDropoff { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for InputError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
