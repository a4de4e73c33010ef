//! Core error types for izedio primitives.
//!
//! Every misuse of an `Optional`, a bus or a future is reported through
//! this enum. Failures produced by a future's own computation are not errors
//! of this kind: they are stored as the future's outcome.

use thiserror::Error;

/// Result type alias for izedio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for izedio operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required value, option, listener, key or child was missing.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A value was requested from an empty `Optional`.
    #[error("no value: {reason}")]
    NoValue { reason: String },

    /// The operation does not fit the current state of the receiver.
    #[error("illegal state: {reason}")]
    IllegalState { reason: String },

    /// The receiver never supports the operation.
    #[error("unsupported operation: {operation}")]
    UnsupportedOperation { operation: String },
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create a no value error.
    pub fn no_value(reason: impl Into<String>) -> Self {
        Self::NoValue {
            reason: reason.into(),
        }
    }

    /// Create an illegal state error.
    pub fn illegal_state(reason: impl Into<String>) -> Self {
        Self::IllegalState {
            reason: reason.into(),
        }
    }

    /// Create an unsupported operation error.
    pub fn unsupported_operation(operation: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
        }
    }
}
