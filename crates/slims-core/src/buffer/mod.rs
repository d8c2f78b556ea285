//! In-memory save buffer and its trailing checksum.

mod bytes;
pub mod checksum;

pub use bytes::{ByteBuffer, ByteWidth};
pub use checksum::ChecksumDescriptor;
