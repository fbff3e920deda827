//! Dynamic construction inputs.
//!
//! Most callers build buffers through the named constructors on
//! [`ByteBuffer`](crate::ByteBuffer). [`Source`] exists for call sites that
//! only learn the shape of their input at runtime, such as values decoded from
//! a loosely typed configuration or message.

use crate::byte_buffer::ByteBuffer;
use crate::error::{Error, Result};
use crate::validate;
use std::str::FromStr;

/// Text encoding understood by [`Source::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Encoding {
    /// Big-endian UTF-16 code units, two bytes each.
    #[default]
    Utf16,
    /// Two hexadecimal digits per byte.
    Hex,
}

impl Encoding {
    /// Returns the tag used to select this encoding.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Utf16 => "utf16",
            Self::Hex => "hex",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("utf16") {
            Ok(Self::Utf16)
        } else if s.eq_ignore_ascii_case("hex") {
            Ok(Self::Hex)
        } else {
            Err(validate::invalid_argument(
                "Encoding::from_str",
                "unknown encoding, expected \"utf16\" or \"hex\"",
                s,
            ))
        }
    }
}

/// Input accepted by [`ByteBuffer::from_source`](crate::ByteBuffer::from_source).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A zero-filled buffer of this many bytes.
    Count(i64),
    /// A string decoded with the given encoding.
    Text {
        /// The encoded text.
        value: String,
        /// How `value` maps to bytes.
        encoding: Encoding,
    },
    /// A copy of an existing buffer.
    Buffer(ByteBuffer),
    /// Raw bytes, copied as-is.
    Bytes(Vec<u8>),
    /// Integer values, each of which must fit in a byte.
    Values(Vec<i64>),
}

impl Source {
    /// Creates a text source with the default UTF-16 encoding.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
            encoding: Encoding::default(),
        }
    }

    /// Creates a text source from an encoding tag such as `"hex"`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `tag` names no known encoding.
    pub fn tagged(value: impl Into<String>, tag: &str) -> Result<Self> {
        Ok(Self::Text {
            value: value.into(),
            encoding: tag.parse()?,
        })
    }

    /// Returns a short name for the shape of this source.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Count(_) => "count",
            Self::Text { .. } => "text",
            Self::Buffer(_) => "buffer",
            Self::Bytes(_) => "bytes",
            Self::Values(_) => "values",
        }
    }

    /// Borrows the buffer held by this source.
    ///
    /// # Errors
    /// Returns `TypeMismatch` naming `operation` if this is not a
    /// [`Source::Buffer`].
    pub fn as_buffer(&self, operation: &'static str) -> Result<&ByteBuffer> {
        match self {
            Self::Buffer(buffer) => Ok(buffer),
            other => Err(validate::type_mismatch(
                operation,
                format!("expected a buffer, found {}", other.shape()),
                other,
            )),
        }
    }
}

impl From<&str> for Source {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<ByteBuffer> for Source {
    fn from(buffer: ByteBuffer) -> Self {
        Self::Buffer(buffer)
    }
}

impl From<Vec<u8>> for Source {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Source {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}
