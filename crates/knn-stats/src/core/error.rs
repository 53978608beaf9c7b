//! Errors raised by the query services and the algorithms.

use thiserror::Error;

/// Errors that abort an algorithm invocation.
///
/// None of these are recovered from internally. Empty neighborhoods are not
/// errors; they have defined fallback values in [`Slom`](crate::slom::Slom).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// A vector does not have the dimensionality of the dataset it is compared against.
    #[error("incompatible dimension: expected {expected}, found {found}")]
    IncompatibleDimension {
        /// The dimensionality of the dataset.
        expected: usize,
        /// The dimensionality of the offending vector.
        found: usize,
    },

    /// More points were requested than the dataset holds.
    #[error("insufficient data: requested {requested} points but only {available} are available")]
    InsufficientData {
        /// The number of requested points.
        requested: usize,
        /// The number of points in the dataset.
        available: usize,
    },

    /// Arithmetic produced NaN or infinity outside of the defined workarounds.
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(String),

    /// A parameter or input was rejected before any computation started.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An identifier is not part of the dataset.
    #[error("unknown point: {0}")]
    UnknownPoint(String),

    /// An external query service failed.
    #[error("query failed: {0}")]
    Query(String),
}

/// The `Result` type used throughout the crate.
pub type Result<T> = core::result::Result<T, StatsError>;

/// Checks that a vector of dimensionality `found` may be compared against a
/// dataset of dimensionality `expected`.
pub(crate) const fn check_dim(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(StatsError::IncompatibleDimension { expected, found })
    }
}

/// Returns `value` if it is finite, and a `NumericDegeneracy` error naming
/// `what` otherwise.
pub(crate) fn finite(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StatsError::NumericDegeneracy(format!("{what} is {value}")))
    }
}
