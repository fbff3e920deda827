//! Read-only byte access shared by buffers and raw byte sequences.
//!
//! [`ReadBuffer`] is the seam that lets operations such as
//! [`ByteBuffer::concat`](crate::ByteBuffer::concat) and
//! [`ByteBuffer::index_of`](crate::ByteBuffer::index_of) accept either another
//! buffer or a plain byte slice.

/// Trait for read-only access to a contiguous run of bytes.
///
/// Multi-byte reads use big-endian byte order, matching the UTF-16 layout of
/// [`ByteBuffer`](crate::ByteBuffer).
pub trait ReadBuffer {
    /// Returns the bytes as a slice.
    fn as_slice(&self) -> &[u8];

    /// Returns the number of bytes.
    fn len(&self) -> usize;

    /// Returns true if there are no bytes.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads a u8 at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_u8(&self, offset: usize) -> u8 {
        self.as_slice()[offset]
    }

    /// Reads a u16 in big-endian at the given offset.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to read from
    #[inline(always)]
    fn get_u16_be(&self, offset: usize) -> u16 {
        let bytes = &self.as_slice()[offset..offset + 2];
        u16::from_be_bytes([bytes[0], bytes[1]])
    }

    /// Returns a slice of bytes at the given offset and length.
    ///
    /// # Arguments
    /// * `offset` - Byte offset to start from
    /// * `len` - Number of bytes to read
    #[inline(always)]
    fn get_bytes(&self, offset: usize, len: usize) -> &[u8] {
        &self.as_slice()[offset..offset + len]
    }

    /// Finds the first occurrence of `needle` starting at or after `from`.
    ///
    /// An empty needle matches at `from` when `from` is within bounds.
    fn find(&self, needle: &[u8], from: usize) -> Option<usize> {
        let haystack = self.as_slice();
        if from > haystack.len() {
            return None;
        }
        if needle.is_empty() {
            return Some(from);
        }
        haystack[from..]
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|pos| pos + from)
    }
}

impl ReadBuffer for [u8] {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }
}

impl<const N: usize> ReadBuffer for [u8; N] {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }
}

impl ReadBuffer for Vec<u8> {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}
