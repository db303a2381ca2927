// Error types for plasma source construction and sampling

use thiserror::Error;

/// Errors raised while building or sampling plasma neutron sources.
///
/// Everything is detected synchronously: parameter combinations fail at
/// construction time, per-call inputs (temperatures, angles, sample
/// counts, normalised radii) fail at the call that receives them.
/// Out-of-domain inputs are never clamped to a valid value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("fuel must be either \"DT\" or \"DD\", not {0:?}")]
    UnsupportedFuel(String),

    #[error("ion temperature must be a positive number of eV, got {0}")]
    InvalidTemperature(f64),

    #[error("stop angle ({stop} rad) must be greater than start angle ({start} rad)")]
    InvalidAngleRange { start: f64, stop: f64 },

    #[error("sample size must be at least 1, got {0}")]
    InvalidSampleCount(usize),

    #[error("normalised minor radius must be within [0, 1], got {0}")]
    OutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, SourceError>;
