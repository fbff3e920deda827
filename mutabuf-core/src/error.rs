//! Error types for mutabuf operations.

use thiserror::Error;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-domain input.
    InvalidArgument,
    /// A buffer was expected but another kind of value was supplied.
    TypeMismatch,
    /// Two operands that must have the same length do not.
    LengthMismatch,
    /// The operation is undefined for the buffer's current contents.
    InvalidState,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::InvalidArgument => "invalid argument",
            Self::TypeMismatch => "type mismatch",
            Self::LengthMismatch => "length mismatch",
            Self::InvalidState => "invalid state",
        };
        f.write_str(name)
    }
}

/// Core error type for buffer operations.
///
/// Every variant names the operation that rejected its input, so a failure
/// can be traced back to the call site without a backtrace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input outside the domain of the operation.
    #[error("{operation}: {message} (got {value})")]
    InvalidArgument {
        /// Operation that rejected the input.
        operation: &'static str,
        /// Human-readable description of the problem.
        message: String,
        /// Rendering of the offending value.
        value: String,
    },

    /// A buffer operand was required.
    #[error("{operation}: {message} (got {value})")]
    TypeMismatch {
        /// Operation that rejected the input.
        operation: &'static str,
        /// Human-readable description of the problem.
        message: String,
        /// Rendering of the offending value.
        value: String,
    },

    /// Operand lengths differ.
    #[error("{operation}: length mismatch: expected {expected} bytes, got {actual} bytes")]
    LengthMismatch {
        /// Operation that rejected the input.
        operation: &'static str,
        /// Length of the receiver in bytes.
        expected: usize,
        /// Length of the operand in bytes.
        actual: usize,
    },

    /// The receiver cannot satisfy the operation.
    #[error("{operation}: {message} (got {value})")]
    InvalidState {
        /// Operation that rejected the receiver.
        operation: &'static str,
        /// Human-readable description of the problem.
        message: String,
        /// Rendering of the offending state.
        value: String,
    },
}

impl Error {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
        }
    }

    /// Returns the name of the operation that raised this error.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::InvalidArgument { operation, .. }
            | Self::TypeMismatch { operation, .. }
            | Self::LengthMismatch { operation, .. }
            | Self::InvalidState { operation, .. } => *operation,
        }
    }
}

/// Result type alias for mutabuf operations.
pub type Result<T> = std::result::Result<T, Error>;
