//! Prelude module for convenient imports.
//!
//! ```
//! use mutabuf::prelude::*;
//! ```

pub use mutabuf_core::buffer::ReadBuffer;
pub use mutabuf_core::byte_buffer::ByteBuffer;
pub use mutabuf_core::error::{Error as BufferError, ErrorKind, Result as BufferResult};
pub use mutabuf_core::source::{Encoding, Source};
