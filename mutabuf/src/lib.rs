//! # mutabuf
//!
//! Owned byte buffers with value semantics.
//!
//! ## Features
//!
//! - **Multiple encodings** - Build buffers from raw bytes, big-endian UTF-16
//!   text, hex text or other buffers, and convert back
//! - **Slicing and search** - Negative and clamped indices, `index_of` over
//!   buffers or plain byte slices
//! - **Padding** - Fixed-length and block-aligned padding on either end, plus
//!   depadding
//! - **Byte-wise XOR** between equal-length buffers
//!
//! ## Quick Start
//!
//! ```
//! use mutabuf::prelude::*;
//!
//! let key = ByteBuffer::from_hex("0f0f0f")?;
//! let data = ByteBuffer::from_utf16_string("a").right_block_pad(0, 3)?;
//! let masked = data.xor(&key)?;
//! assert_eq!(masked.to_hex(), "0f6e0f");
//! # Ok::<(), mutabuf::core::Error>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - The buffer type, error types and precondition checks

pub mod prelude;

/// Core buffer types.
pub mod core {
    pub use mutabuf_core::*;
}

// Re-export commonly used items at the crate root
pub use mutabuf_core::{ByteBuffer, Encoding, Error, ErrorKind, ReadBuffer, Result, Source};
