//! Deterministic sample data for benchmarks.

use mutabuf_core::ByteBuffer;

/// Sizes exercised by the benchmark groups.
pub const SIZES: [usize; 4] = [16, 256, 4096, 65536];

/// Returns a buffer of `len` bytes following a fixed pseudo-random pattern.
#[must_use]
pub fn pattern(len: usize) -> ByteBuffer {
    let mut state: u32 = 0x9E37_79B9;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

/// Returns `len` bytes of pattern data followed by `tail` bytes of `fill`.
#[must_use]
pub fn padded(len: usize, fill: u8, tail: usize) -> ByteBuffer {
    pattern(len).right_pad(fill, len + tail)
}

/// Returns the lowercase hex rendering of [`pattern`].
#[must_use]
pub fn hex(len: usize) -> String {
    pattern(len).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_is_deterministic() {
        assert_eq!(pattern(32), pattern(32));
        assert_eq!(pattern(32).len(), 32);
    }

    #[test]
    fn test_padded_tail() {
        let buffer = padded(8, 0, 4);
        assert_eq!(buffer.len(), 12);
        assert_eq!(buffer.left_trim(8), ByteBuffer::zeroed(4));
    }

    #[test]
    fn test_hex_length() {
        assert_eq!(hex(10).len(), 20);
    }
}
