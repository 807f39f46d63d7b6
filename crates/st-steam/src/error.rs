//! Resolver and oracle errors.

use crate::property::{PropertyKind, UnitSystem};
use st_core::StError;
use thiserror::Error;

/// Result type for state resolution and delta reporting.
pub type SteamResult<T> = Result<T, SteamError>;

/// The two error kinds the calculator reports.
///
/// `InvalidInput` is always caller-recoverable (fix the value and resubmit).
/// `Oracle` means the steam-table backend could not service a query; the
/// resolver holds no state, so a later call with different inputs proceeds
/// normally. Neither kind is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SteamError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("steam table error: {0}")]
    Oracle(#[from] OracleError),
}

/// Caller-supplied values that violate a documented precondition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("cannot specify {kind} twice for one state")]
    DuplicateProperty { kind: PropertyKind },

    #[error("property combination ({first}, {second}) is not implemented")]
    UnsupportedPair {
        first: PropertyKind,
        second: PropertyKind,
    },

    #[error("{kind} value {value} is not finite")]
    NonFinite { kind: PropertyKind, value: f64 },

    #[error("pressure {value:.3} {unit} must be > 0")]
    PressureNotPositive { value: f64, unit: &'static str },

    #[error("pressure {value:.3} {unit} above supported limit of {limit:.3} {unit}")]
    PressureAboveLimit {
        value: f64,
        limit: f64,
        unit: &'static str,
    },

    #[error("temperature {value:.2} {unit} below supported minimum of {limit:.2} {unit}")]
    TemperatureBelowLimit {
        value: f64,
        limit: f64,
        unit: &'static str,
    },

    #[error("temperature {value:.2} {unit} above supported maximum of {limit:.2} {unit}")]
    TemperatureAboveLimit {
        value: f64,
        limit: f64,
        unit: &'static str,
    },

    #[error("cannot diff states resolved under different unit systems ({first} vs {second})")]
    UnitSystemMismatch {
        first: UnitSystem,
        second: UnitSystem,
    },
}

/// Failures from the steam-table backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OracleError {
    #[error("steam table query out of range: {what}")]
    OutOfRange { what: &'static str },

    #[error("steam table backend error: {message}")]
    Backend { message: String },
}

impl From<SteamError> for StError {
    fn from(err: SteamError) -> Self {
        match err {
            SteamError::InvalidInput(inner) => StError::InvalidArg {
                what: inner.to_string(),
            },
            SteamError::Oracle(inner) => StError::Invariant {
                what: inner.to_string(),
            },
        }
    }
}
