//! Precondition checks shared by buffer operations.
//!
//! Each check either passes the (possibly narrowed) value through or builds
//! the descriptive [`Error`] for the calling operation. Failures are logged at
//! debug level before being returned.

use crate::error::{Error, Result};
use std::fmt::Debug;

/// Builds an [`Error::InvalidArgument`] for `operation`.
pub fn invalid_argument(
    operation: &'static str,
    message: impl Into<String>,
    value: impl Debug,
) -> Error {
    let message = message.into();
    tracing::debug!(operation, %message, "invalid argument");
    Error::InvalidArgument {
        operation,
        message,
        value: format!("{value:?}"),
    }
}

/// Builds an [`Error::TypeMismatch`] for `operation`.
pub fn type_mismatch(
    operation: &'static str,
    message: impl Into<String>,
    value: impl Debug,
) -> Error {
    let message = message.into();
    tracing::debug!(operation, %message, "type mismatch");
    Error::TypeMismatch {
        operation,
        message,
        value: format!("{value:?}"),
    }
}

/// Builds an [`Error::InvalidState`] for `operation`.
pub fn invalid_state(
    operation: &'static str,
    message: impl Into<String>,
    value: impl Debug,
) -> Error {
    let message = message.into();
    tracing::debug!(operation, %message, "invalid state");
    Error::InvalidState {
        operation,
        message,
        value: format!("{value:?}"),
    }
}

/// Narrows an integer to a byte value.
///
/// # Errors
/// Returns `InvalidArgument` if `value` is outside `0..=255`.
pub fn byte(operation: &'static str, value: i64) -> Result<u8> {
    u8::try_from(value)
        .map_err(|_| invalid_argument(operation, "byte value must be within 0..=255", value))
}

/// Narrows an integer to a byte count.
///
/// # Errors
/// Returns `InvalidArgument` if `value` is negative.
pub fn length(operation: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| invalid_argument(operation, "length must not be negative", value))
}

/// Checks that a block size can be aligned to.
///
/// # Errors
/// Returns `InvalidArgument` if `size` is zero.
pub fn block_size(operation: &'static str, size: usize) -> Result<usize> {
    if size == 0 {
        return Err(invalid_argument(
            operation,
            "block size must be greater than zero",
            size,
        ));
    }
    Ok(size)
}

/// Translates a hex decoding failure into an `InvalidArgument`.
pub fn hex(operation: &'static str, input: &str, err: ::hex::FromHexError) -> Error {
    let message = match err {
        ::hex::FromHexError::OddLength => "hex string must have an even number of digits".to_string(),
        ::hex::FromHexError::InvalidHexCharacter { c, index } => {
            format!("invalid hex digit {c:?} at index {index}")
        }
        ::hex::FromHexError::InvalidStringLength => "invalid hex string length".to_string(),
    };
    invalid_argument(operation, message, input)
}

/// Checks that two operands have the same length.
///
/// # Errors
/// Returns `LengthMismatch` if the lengths differ.
pub fn same_length(operation: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        tracing::debug!(operation, expected, actual, "length mismatch");
        return Err(Error::LengthMismatch {
            operation,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Checks that a byte count can be split into UTF-16 code units.
///
/// # Errors
/// Returns `InvalidState` if `len` is odd.
pub fn even_length(operation: &'static str, len: usize) -> Result<()> {
    if len % 2 != 0 {
        return Err(invalid_state(
            operation,
            "byte length must be even to hold UTF-16 code units",
            len,
        ));
    }
    Ok(())
}

/// Error for an operation that needs at least one byte.
pub fn empty(operation: &'static str) -> Error {
    invalid_state(operation, "buffer is empty", 0usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_byte_range() {
        assert_eq!(byte("op", 0).unwrap(), 0);
        assert_eq!(byte("op", 255).unwrap(), 255);
        assert_eq!(byte("op", 256).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(byte("op", -1).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_length_rejects_negative() {
        assert_eq!(length("op", 3).unwrap(), 3);
        let err = length("ByteBuffer::generate", -2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.operation(), "ByteBuffer::generate");
        assert!(err.to_string().contains("-2"));
    }

    #[test]
    fn test_block_size_rejects_zero() {
        assert_eq!(block_size("op", 16).unwrap(), 16);
        assert_eq!(
            block_size("op", 0).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_hex_error_messages() {
        let err = hex("op", "abc", ::hex::FromHexError::OddLength);
        assert!(err.to_string().contains("even number of digits"));

        let err = hex(
            "op",
            "zz",
            ::hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 },
        );
        assert!(err.to_string().contains("'z' at index 0"));
    }

    #[test]
    fn test_same_length() {
        assert!(same_length("op", 2, 2).is_ok());
        assert_eq!(
            same_length("op", 2, 3).unwrap_err(),
            Error::LengthMismatch {
                operation: "op",
                expected: 2,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_even_length() {
        assert!(even_length("op", 0).is_ok());
        assert!(even_length("op", 4).is_ok());
        assert_eq!(
            even_length("op", 3).unwrap_err().kind(),
            ErrorKind::InvalidState
        );
    }

    #[test]
    fn test_empty() {
        let err = empty("ByteBuffer::shift");
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(err.operation(), "ByteBuffer::shift");
    }
}
