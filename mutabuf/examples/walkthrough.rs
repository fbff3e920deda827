//! Tour of the buffer operations.
//!
//! Run with: `RUST_LOG=mutabuf_core=trace cargo run --example walkthrough`

use mutabuf::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BufferError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let greeting = ByteBuffer::from_utf16_string("Hi");
    tracing::info!(hex = %greeting, "utf16 encoded");

    let block = greeting.right_block_pad(0, 8)?;
    println!("padded to block:  {block}");
    println!("depadded:         {}", block.right_depad(0));

    let key = ByteBuffer::generate(0x5A, block.len());
    let masked = block.xor(&key)?;
    println!("masked:           {masked}");
    println!("unmasked:         {}", masked.xor(&key)?);

    let source = Source::tagged("deadbeef", "hex")?;
    let mut stack = ByteBuffer::from_source(source)?;
    stack.push(0x01);
    let last = stack.pop()?;
    println!("popped {last} from {stack}");
    println!("shifted:          {}", stack.shift()?);
    println!("index of beef:    {:?}", stack.index_of(&[0xBEu8, 0xEF][..], 0));

    if let Err(err) = ByteBuffer::from_hex("abc") {
        tracing::warn!(kind = %err.kind(), "{err}");
    }
    if let Err(err) = block.xor(&greeting) {
        tracing::warn!(kind = %err.kind(), "{err}");
    }

    Ok(())
}
