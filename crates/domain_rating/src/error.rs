//! Rating domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the rating domain
///
/// `InvalidFactor` is the only error a calculation can produce. The remaining
/// variants are table-validation failures surfaced at construction or load
/// time, before any calculation runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    /// A rating-factor value has no entry in its coefficient table
    #[error("Invalid value for {field}: {value}")]
    InvalidFactor {
        field: &'static str,
        value: String,
    },

    /// A coefficient table lacks an entry for an enumerated key
    #[error("Coefficient table '{table}' is missing an entry for '{key}'")]
    MissingEntry {
        table: &'static str,
        key: String,
    },

    /// A coefficient table carries a zero or negative multiplier
    #[error("Coefficient table '{table}' has non-positive value {value} for '{key}'")]
    NonPositiveCoefficient {
        table: &'static str,
        key: String,
        value: Decimal,
    },

    /// A coefficient table carries a key outside its factor's domain
    #[error("Coefficient table '{table}' has out-of-domain key '{key}'")]
    OutOfDomainKey {
        table: &'static str,
        key: String,
    },

    /// A rating-table document could not be parsed
    #[error("Invalid rating table document: {0}")]
    InvalidTableDocument(String),
}

impl RatingError {
    /// Creates an invalid-factor error for a field and the offending value
    pub fn invalid_factor(field: &'static str, value: impl std::fmt::Display) -> Self {
        RatingError::InvalidFactor {
            field,
            value: value.to_string(),
        }
    }
}
