//! Serialization of buffers as hex strings.

#![cfg(feature = "serde")]

use mutabuf_core::{ByteBuffer, Encoding};

#[test]
fn test_buffer_serializes_as_hex() {
    let buffer = ByteBuffer::from_bytes([0xCAu8, 0xFE]);
    assert_eq!(serde_json::to_string(&buffer).unwrap(), "\"cafe\"");
    let back: ByteBuffer = serde_json::from_str("\"CAFE\"").unwrap();
    assert_eq!(back, buffer);
}

#[test]
fn test_buffer_rejects_odd_hex() {
    assert!(serde_json::from_str::<ByteBuffer>("\"abc\"").is_err());
}

#[test]
fn test_encoding_uses_tag() {
    assert_eq!(serde_json::to_string(&Encoding::Hex).unwrap(), "\"hex\"");
    let encoding: Encoding = serde_json::from_str("\"utf16\"").unwrap();
    assert_eq!(encoding, Encoding::Utf16);
}
