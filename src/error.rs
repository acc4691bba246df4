//! Error types for remote-data.
//!
//! Folding and classification are total and never fail. Errors only
//! appear at the edges: building an [`Aggregate`](crate::Aggregate) from
//! too few states, and decoding the JSON wire format.

use thiserror::Error;

/// Validation errors raised while constructing library values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Aggregate needs at least 2 states, got {actual}")]
    TooFewStates {
        actual: usize,
    },
}

/// Top-level error type for remote-data.
#[derive(Debug, Error)]
pub enum RemoteDataError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
    },
}

impl RemoteDataError {
    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a serialization error.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

/// Result type alias for fallible remote-data operations.
pub type RemoteDataResult<T> = Result<T, RemoteDataError>;
