//! # mutabuf Core
//!
//! An owned byte buffer with value semantics.
//!
//! This crate provides:
//! - [`ByteBuffer`], constructed from raw bytes, UTF-16 text, hex text or
//!   another buffer, with slicing, padding, depadding and XOR operations
//! - [`ReadBuffer`] for read-only access shared by buffers and byte slices
//! - [`Source`] and [`Encoding`] for inputs whose shape is only known at runtime
//! - Error types and the precondition checks that raise them

pub mod buffer;
pub mod byte_buffer;
pub mod error;
pub mod source;
pub mod validate;

pub use buffer::ReadBuffer;
pub use byte_buffer::ByteBuffer;
pub use error::{Error, ErrorKind, Result};
pub use source::{Encoding, Source};
