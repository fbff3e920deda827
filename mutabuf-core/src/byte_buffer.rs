//! The [`ByteBuffer`] value type.
//!
//! A `ByteBuffer` owns a contiguous run of bytes. Conversions and
//! transformations return new buffers; only the end operations
//! ([`push`](ByteBuffer::push), [`pop`](ByteBuffer::pop),
//! [`shift`](ByteBuffer::shift), [`unshift`](ByteBuffer::unshift)) modify the
//! receiver.
//!
//! # Example
//! ```
//! use mutabuf_core::ByteBuffer;
//!
//! let block = ByteBuffer::from_bytes([1u8, 2, 3]).right_block_pad(0, 4)?;
//! assert_eq!(block.to_hex(), "01020300");
//! # Ok::<(), mutabuf_core::Error>(())
//! ```

use crate::buffer::ReadBuffer;
use crate::error::Result;
use crate::source::{Encoding, Source};
use crate::validate;
use std::str::FromStr;

/// Owned, growable sequence of bytes with value semantics.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

/// Resolves a possibly negative index against `len`, clamping to `0..=len`.
#[inline]
fn resolve_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    }
}

impl ByteBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Creates a buffer of `length` zero bytes.
    #[must_use]
    pub fn zeroed(length: usize) -> Self {
        Self::generate(0, length)
    }

    /// Creates a buffer of `length` bytes, each equal to `byte`.
    ///
    /// # Arguments
    /// * `byte` - Fill value
    /// * `length` - Number of bytes
    #[must_use]
    pub fn generate(byte: u8, length: usize) -> Self {
        Self {
            bytes: vec![byte; length],
        }
    }

    /// Creates a single-byte buffer.
    #[must_use]
    pub fn generate_one(byte: u8) -> Self {
        Self::generate(byte, 1)
    }

    /// Integer-valued form of [`generate`](Self::generate).
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `byte` is outside `0..=255` or `length`
    /// is negative.
    pub fn generate_checked(byte: i64, length: i64) -> Result<Self> {
        const OP: &str = "ByteBuffer::generate";
        let byte = validate::byte(OP, byte)?;
        let length = validate::length(OP, length)?;
        Ok(Self::generate(byte, length))
    }

    /// Copies raw bytes into a new buffer.
    #[must_use]
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            bytes: bytes.as_ref().to_vec(),
        }
    }

    /// Copies integer values into a new buffer.
    ///
    /// # Errors
    /// Returns `InvalidArgument` on the first value outside `0..=255`; no
    /// buffer is produced in that case.
    pub fn try_from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let bytes = values
            .into_iter()
            .map(|value| validate::byte("ByteBuffer::from_values", value))
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { bytes })
    }

    /// Creates an independent copy of another buffer.
    #[must_use]
    pub fn from_buffer(other: &ByteBuffer) -> Self {
        other.to_buffer()
    }

    /// Encodes each UTF-16 code unit of `s` as two big-endian bytes.
    #[must_use]
    pub fn from_utf16_string(s: &str) -> Self {
        s.encode_utf16().flat_map(u16::to_be_bytes).collect()
    }

    /// Encodes arbitrary UTF-16 code units, including unpaired surrogates.
    #[must_use]
    pub fn from_utf16_units(units: &[u16]) -> Self {
        units.iter().flat_map(|unit| unit.to_be_bytes()).collect()
    }

    /// Decodes a hexadecimal string, two digits per byte.
    ///
    /// Digits may be upper or lower case; separators and prefixes are not
    /// accepted.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the string has an odd number of
    /// characters or contains a non-hex character.
    pub fn from_hex(hex: &str) -> Result<Self> {
        ::hex::decode(hex)
            .map(|bytes| Self { bytes })
            .map_err(|err| validate::hex("ByteBuffer::from_hex", hex, err))
    }

    /// Decodes `value` with the given text encoding.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is not valid for `encoding`.
    pub fn from_string(value: &str, encoding: Encoding) -> Result<Self> {
        match encoding {
            Encoding::Utf16 => Ok(Self::from_utf16_string(value)),
            Encoding::Hex => Self::from_hex(value),
        }
    }

    /// Builds a buffer from a runtime-shaped input.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a negative count, an out-of-range value,
    /// or text that does not decode under its encoding.
    pub fn from_source(source: Source) -> Result<Self> {
        const OP: &str = "ByteBuffer::from_source";
        match source {
            Source::Count(count) => Ok(Self::zeroed(validate::length(OP, count)?)),
            Source::Text { value, encoding } => Self::from_string(&value, encoding),
            Source::Buffer(buffer) => Ok(buffer),
            Source::Bytes(bytes) => Ok(Self { bytes }),
            Source::Values(values) => Self::try_from_values(values),
        }
    }

    /// Returns the number of bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the buffer holds no bytes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrows the bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterates over the bytes.
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.bytes.iter()
    }

    /// Returns an independent copy of the bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Returns an independent copy of the buffer.
    #[must_use]
    pub fn to_buffer(&self) -> Self {
        self.slice(0, None)
    }

    /// Decodes the bytes as big-endian UTF-16 code units.
    ///
    /// # Errors
    /// Returns `InvalidState` if the byte length is odd.
    pub fn to_utf16_units(&self) -> Result<Vec<u16>> {
        validate::even_length("ByteBuffer::to_utf16_units", self.len())?;
        Ok((0..self.len())
            .step_by(2)
            .map(|offset| self.get_u16_be(offset))
            .collect())
    }

    /// Decodes the bytes as a big-endian UTF-16 string.
    ///
    /// # Errors
    /// Returns `InvalidState` if the byte length is odd or the code units
    /// contain an unpaired surrogate.
    pub fn to_utf16_string(&self) -> Result<String> {
        const OP: &str = "ByteBuffer::to_utf16_string";
        validate::even_length(OP, self.len())?;
        let units = self.to_utf16_units()?;
        String::from_utf16(&units)
            .map_err(|_| validate::invalid_state(OP, "unpaired UTF-16 surrogate", self))
    }

    /// Renders every byte as two lowercase hex digits.
    #[must_use]
    pub fn to_hex(&self) -> String {
        ::hex::encode(&self.bytes)
    }

    /// Returns the bytes in `[start, end)` as a new buffer.
    ///
    /// Negative indices count back from the end, out-of-range indices are
    /// clamped, and `end = None` means the end of the buffer. An end at or
    /// before the start yields an empty buffer.
    #[must_use]
    pub fn slice(&self, start: isize, end: Option<isize>) -> Self {
        let len = self.len();
        let start = resolve_index(start, len);
        let end = end.map_or(len, |end| resolve_index(end, len));
        if end <= start {
            return Self::new();
        }
        Self::from_bytes(&self.bytes[start..end])
    }

    /// Returns `self` followed by `other`.
    #[must_use]
    pub fn concat<B: ReadBuffer + ?Sized>(&self, other: &B) -> Self {
        let other = other.as_slice();
        let mut bytes = Vec::with_capacity(self.len() + other.len());
        bytes.extend_from_slice(&self.bytes);
        bytes.extend_from_slice(other);
        Self { bytes }
    }

    /// Byte-wise equality.
    #[must_use]
    pub fn equals(&self, other: &ByteBuffer) -> bool {
        self == other
    }

    /// Byte-wise equality against a runtime-shaped operand.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if `other` does not hold a buffer.
    pub fn equals_source(&self, other: &Source) -> Result<bool> {
        Ok(self.equals(other.as_buffer("ByteBuffer::equals_source")?))
    }

    /// Byte-wise XOR of two equal-length buffers.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the lengths differ.
    pub fn xor(&self, other: &ByteBuffer) -> Result<Self> {
        validate::same_length("ByteBuffer::xor", self.len(), other.len())?;
        Ok(self
            .bytes
            .iter()
            .zip(&other.bytes)
            .map(|(a, b)| a ^ b)
            .collect())
    }

    /// XOR against a runtime-shaped operand.
    ///
    /// # Errors
    /// Returns `TypeMismatch` if `other` does not hold a buffer, or
    /// `LengthMismatch` if the lengths differ.
    pub fn xor_source(&self, other: &Source) -> Result<Self> {
        self.xor(other.as_buffer("ByteBuffer::xor_source")?)
    }

    /// Finds the first occurrence of `search` at or after `from_index`.
    ///
    /// A negative `from_index` counts back from the end. Returns `None` when
    /// there is no match.
    #[must_use]
    pub fn index_of<B: ReadBuffer + ?Sized>(&self, search: &B, from_index: isize) -> Option<usize> {
        let from = resolve_index(from_index, self.len());
        self.bytes.find(search.as_slice(), from)
    }

    /// Appends one byte.
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
        tracing::trace!(len = self.len(), "push");
    }

    /// Removes the last byte and returns it as a one-byte buffer.
    ///
    /// # Errors
    /// Returns `InvalidState` if the buffer is empty.
    pub fn pop(&mut self) -> Result<Self> {
        let byte = self
            .bytes
            .pop()
            .ok_or_else(|| validate::empty("ByteBuffer::pop"))?;
        tracing::trace!(len = self.len(), "pop");
        Ok(Self::generate_one(byte))
    }

    /// Prepends one byte and returns a copy of the updated buffer.
    pub fn unshift(&mut self, byte: u8) -> Self {
        self.bytes.insert(0, byte);
        tracing::trace!(len = self.len(), "unshift");
        self.to_buffer()
    }

    /// Removes the first byte and returns a copy of the updated buffer.
    ///
    /// # Errors
    /// Returns `InvalidState` if the buffer is empty.
    pub fn shift(&mut self) -> Result<Self> {
        if self.is_empty() {
            return Err(validate::empty("ByteBuffer::shift"));
        }
        self.bytes.remove(0);
        tracing::trace!(len = self.len(), "shift");
        Ok(self.to_buffer())
    }

    /// Drops the first `size` bytes; same as `slice(size, None)`.
    #[must_use]
    pub fn left_trim(&self, size: isize) -> Self {
        self.slice(size, None)
    }

    /// Keeps the first `size` bytes; same as `slice(0, Some(size))`.
    #[must_use]
    pub fn right_trim(&self, size: isize) -> Self {
        self.slice(0, Some(size))
    }

    /// Prepends `fill` until the buffer is `length` bytes long.
    ///
    /// Never truncates: a buffer already at least `length` long is copied
    /// unchanged.
    #[must_use]
    pub fn left_pad(&self, fill: u8, length: usize) -> Self {
        let padding = length.saturating_sub(self.len());
        Self::generate(fill, padding).concat(self)
    }

    /// Appends `fill` until the buffer is `length` bytes long.
    ///
    /// Never truncates.
    #[must_use]
    pub fn right_pad(&self, fill: u8, length: usize) -> Self {
        let padding = length.saturating_sub(self.len());
        self.concat(&Self::generate(fill, padding))
    }

    /// Strips leading occurrences of `byte`.
    #[must_use]
    pub fn left_depad(&self, byte: u8) -> Self {
        let start = self
            .bytes
            .iter()
            .position(|&b| b != byte)
            .unwrap_or(self.len());
        Self::from_bytes(&self.bytes[start..])
    }

    /// Strips trailing occurrences of `byte`.
    #[must_use]
    pub fn right_depad(&self, byte: u8) -> Self {
        let end = self
            .bytes
            .iter()
            .rposition(|&b| b != byte)
            .map_or(0, |pos| pos + 1);
        Self::from_bytes(&self.bytes[..end])
    }

    /// Bytes needed to reach the next multiple of `block_size`.
    fn block_padding(&self, operation: &'static str, block_size: usize) -> Result<usize> {
        let block_size = validate::block_size(operation, block_size)?;
        Ok((block_size - self.len() % block_size) % block_size)
    }

    /// Prepends `fill` up to the next multiple of `block_size`.
    ///
    /// An already aligned buffer is returned unchanged.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `block_size` is zero.
    pub fn left_block_pad(&self, fill: u8, block_size: usize) -> Result<Self> {
        let padding = self.block_padding("ByteBuffer::left_block_pad", block_size)?;
        Ok(self.left_pad(fill, self.len() + padding))
    }

    /// Appends `fill` up to the next multiple of `block_size`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `block_size` is zero.
    pub fn right_block_pad(&self, fill: u8, block_size: usize) -> Result<Self> {
        let padding = self.block_padding("ByteBuffer::right_block_pad", block_size)?;
        Ok(self.right_pad(fill, self.len() + padding))
    }
}

impl ReadBuffer for ByteBuffer {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for ByteBuffer {
    fn from(bytes: [u8; N]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buffer: ByteBuffer) -> Self {
        buffer.bytes
    }
}

impl TryFrom<Source> for ByteBuffer {
    type Error = crate::error::Error;

    fn try_from(source: Source) -> Result<Self> {
        Self::from_source(source)
    }
}

impl FromIterator<u8> for ByteBuffer {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            bytes: iter.into_iter().collect(),
        }
    }
}

impl Extend<u8> for ByteBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.bytes.extend(iter);
    }
}

impl IntoIterator for ByteBuffer {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ByteBuffer {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.iter()
    }
}

impl FromStr for ByteBuffer {
    type Err = crate::error::Error;

    /// Parses a hexadecimal string.
    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(self, f)
    }
}

impl std::fmt::LowerHex for ByteBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ByteBuffer({self:x})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ByteBuffer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ByteBuffer {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let hex = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
