//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while setting up a rowing simulation.
///
/// All of them are raised before any sequence is allocated; a run either
/// fails here or returns a fully populated result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Non-finite value for parameter {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Run would produce {samples} samples (limit {limit})")]
    TooManySamples { samples: f64, limit: usize },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<rw_core::CoreError> for SimError {
    fn from(e: rw_core::CoreError) -> Self {
        match e {
            rw_core::CoreError::NonFinite { what, value } => SimError::NonFinite { what, value },
            rw_core::CoreError::InvalidArg { what } => SimError::InvalidParameter {
                name: what,
                value: f64::NAN,
                reason: "invalid argument",
            },
        }
    }
}
