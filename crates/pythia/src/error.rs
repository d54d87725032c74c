//! Engine error taxonomy.

use crate::ephemeris::EphemerisError;
use serde::Serialize;
use thiserror::Error;

/// Coarse classification used by front-ends to decide what to show the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Malformed or out-of-domain input, reported back to the caller.
    Input,
    /// The ecliptic position provider failed; usually worth a retry.
    Provider,
    /// A table or runtime defect. Never caused by valid input.
    Internal,
}

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Digit reduction needs a non-negative number, got {0}")]
    NegativeNumber(i64),
    #[error("Cannot reduce to {max} or below: a single digit above the target never changes")]
    UnreachableTarget { max: u64 },
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },
    #[error("Invalid location lat={lat}, lon={lon}: latitude must be within [-90, 90] and longitude within [-180, 180]")]
    InvalidLocation { lat: f64, lon: f64 },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("No entry {key} in the {table} table")]
    Lookup { table: &'static str, key: u64 },
    #[error("Worker task failed: {0}")]
    Worker(String),
}

impl OracleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OracleError::NegativeNumber(_)
            | OracleError::UnreachableTarget { .. }
            | OracleError::InvalidDate { .. }
            | OracleError::InvalidLocation { .. } => ErrorCategory::Input,
            OracleError::Ephemeris(EphemerisError::InvalidHouseSystem { .. }) => ErrorCategory::Input,
            OracleError::Ephemeris(_) => ErrorCategory::Provider,
            OracleError::Lookup { .. } | OracleError::Worker(_) => ErrorCategory::Internal,
        }
    }

    pub(crate) fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        OracleError::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(OracleError::NegativeNumber(-1).category(), ErrorCategory::Input);
        assert_eq!(
            OracleError::Lookup { table: "hexagram", key: 65 }.category(),
            ErrorCategory::Internal
        );
        let provider = OracleError::from(EphemerisError::Unavailable {
            message: "offline".to_string(),
        });
        assert_eq!(provider.category(), ErrorCategory::Provider);
    }

    #[test]
    fn test_messages_are_specific() {
        let err = OracleError::invalid_date("31.02.1990", "no such day in that month");
        assert_eq!(
            err.to_string(),
            "Invalid date '31.02.1990': no such day in that month"
        );
    }
}
