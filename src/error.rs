//! Error types for trigon.
//!
//! Validation failures are modelled with thiserror so callers can match on
//! the failure kind instead of parsing messages.

use bigdecimal::BigDecimal;
use std::fmt;
use thiserror::Error;

use crate::core::side::Side;

/// Fieldless discriminant of [`TriangleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullSide,
    NonPositiveSide,
    TriangleUnequal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NullSide => write!(f, "NullSide"),
            ErrorKind::NonPositiveSide => write!(f, "NonPositiveSide"),
            ErrorKind::TriangleUnequal => write!(f, "TriangleUnequal"),
        }
    }
}

/// Reasons three side lengths do not form a triangle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangleError {
    /// A side was not supplied at all
    #[error("{side} must not be null")]
    NullSide { side: Side },

    /// A side was zero or negative
    #[error("{side} must be positive")]
    NonPositiveSide { side: Side, value: BigDecimal },

    /// A side is at least as long as the other two together
    #[error("{value} is too big")]
    TriangleUnequal { side: Side, value: BigDecimal },
}

impl TriangleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriangleError::NullSide { .. } => ErrorKind::NullSide,
            TriangleError::NonPositiveSide { .. } => ErrorKind::NonPositiveSide,
            TriangleError::TriangleUnequal { .. } => ErrorKind::TriangleUnequal,
        }
    }

    /// The side that failed validation.
    pub fn side(&self) -> Side {
        match self {
            TriangleError::NullSide { side }
            | TriangleError::NonPositiveSide { side, .. }
            | TriangleError::TriangleUnequal { side, .. } => *side,
        }
    }

    /// True for failures on a single argument (missing or non-positive),
    /// false for failures that depend on all three sides.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            TriangleError::NullSide { .. } | TriangleError::NonPositiveSide { .. }
        )
    }
}

/// Result type alias for triangle validation
pub type Result<T> = std::result::Result<T, TriangleError>;

/// Errors from turning user text into a side length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSideError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("not positive: {0}")]
    Negative(BigDecimal),
}

/// Errors from loading a [`crate::config::ShellConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the interactive shell. Validation failures are not errors
/// here; they are reported through [`crate::shell::Outcome::Rejected`].
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed while reading {side}")]
    InputClosed { side: Side },

    #[error("Gave up on {side} after {attempts} invalid attempts")]
    TooManyAttempts { side: Side, attempts: usize },
}
