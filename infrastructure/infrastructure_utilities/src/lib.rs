//! Infrastructure Layer: Utilities
//!
//! Provides the zlib helpers behind the compressed term envelope.
//! Depends on no other workspace crate.

pub mod compression;

pub use compression::{zlib_compress, zlib_decompress, CompressionError, CompressionLevel};
