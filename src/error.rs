//! Error types shared by every component.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;

/// Failures reported by the solver's public entry points.
///
/// Every operation either returns a valid value or fails fast with one of
/// these kinds. Nothing is clamped or retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TspError {
    /// A precondition on an argument or configuration value was violated.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The cost of a tour with no cities is undefined.
    #[error("tour is empty")]
    EmptyTour,
}

impl TspError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TspError::InvalidParameter(msg.into())
    }

    /// Returns `true` for [`TspError::InvalidParameter`].
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, TspError::InvalidParameter(_))
    }
}
