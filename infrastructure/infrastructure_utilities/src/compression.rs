//! Compression Module
//!
//! Provides one-shot zlib compression and decompression (via flate2). This
//! module implements the part of the C `erl_zlib.c` functionality that
//! `term_to_binary(Term, [compressed])` and `binary_to_term/1` rely on.
//!
//! ## Usage
//!
//! ```rust
//! use infrastructure_utilities::compression::{zlib_compress, zlib_decompress, CompressionLevel};
//!
//! let data = b"Hello, world! Hello, world! Hello, world!";
//! let compressed = zlib_compress(data, CompressionLevel::DEFAULT).unwrap();
//! let (restored, consumed) = zlib_decompress(&compressed, data.len()).unwrap();
//! assert_eq!(&restored, data);
//! assert_eq!(consumed, compressed.len());
//! ```
//!
//! Based on `erts/emulator/beam/erl_zlib.c`

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use std::io::Write;
use thiserror::Error;

/// Zlib compression level, 0 (store) through 9 (best)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressionLevel(u32);

impl CompressionLevel {
    /// No compression (0)
    pub const NONE: CompressionLevel = CompressionLevel(0);
    /// Best speed (1)
    pub const BEST_SPEED: CompressionLevel = CompressionLevel(1);
    /// Default compression (6)
    pub const DEFAULT: CompressionLevel = CompressionLevel(6);
    /// Best compression (9)
    pub const BEST_COMPRESSION: CompressionLevel = CompressionLevel(9);

    /// Validate a numeric level
    pub fn new(level: u32) -> Result<Self, CompressionError> {
        if level > 9 {
            return Err(CompressionError::InvalidLevel(level));
        }
        Ok(CompressionLevel(level))
    }

    /// The numeric level
    pub fn level(self) -> u32 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::DEFAULT
    }
}

impl From<CompressionLevel> for Compression {
    fn from(level: CompressionLevel) -> Self {
        Compression::new(level.0)
    }
}

impl TryFrom<u32> for CompressionLevel {
    type Error = CompressionError;

    fn try_from(level: u32) -> Result<Self, Self::Error> {
        CompressionLevel::new(level)
    }
}

/// Compression error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompressionError {
    /// Level outside 0..=9
    #[error("Invalid compression level: {0}")]
    InvalidLevel(u32),

    /// The deflate stream could not be written
    #[error("Stream error: {0}")]
    StreamError(String),

    /// Corrupted or invalid zlib data
    #[error("Data error: {0}")]
    DataError(String),

    /// Inflated output does not have the declared size
    #[error("Size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Result type for compression operations
pub type CompressionResult<T> = Result<T, CompressionError>;

/// Compress `data` into a zlib stream (equivalent to `compress2`)
pub fn zlib_compress(data: &[u8], level: CompressionLevel) -> CompressionResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2 + 16), level.into());
    encoder
        .write_all(data)
        .map_err(|e| CompressionError::StreamError(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| CompressionError::StreamError(e.to_string()))
}

/// Inflate a zlib stream that must produce exactly `expected_len` bytes
///
/// Returns the inflated bytes and the number of input bytes the stream
/// occupied, so callers can continue reading after it. The stream must reach
/// its end, checksum included. Output never grows past one byte more than
/// `expected_len`, so a stream that inflates to far more than declared is
/// rejected without being expanded.
pub fn zlib_decompress(data: &[u8], expected_len: usize) -> CompressionResult<(Vec<u8>, usize)> {
    let limit = expected_len.saturating_add(1);
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(limit.min(data.len().saturating_mul(8).max(64)));

    loop {
        let consumed = inflater.total_in() as usize;
        let produced = out.len();
        let status = inflater
            .decompress_vec(&data[consumed..], &mut out, FlushDecompress::None)
            .map_err(|e| CompressionError::DataError(e.to_string()))?;

        if out.len() > expected_len {
            return Err(CompressionError::SizeMismatch {
                expected: expected_len,
                actual: out.len(),
            });
        }
        if status == Status::StreamEnd {
            break;
        }
        if out.len() == out.capacity() {
            out.reserve_exact((limit - out.len()).min(out.capacity().max(64)));
            continue;
        }
        if inflater.total_in() as usize == consumed && out.len() == produced {
            return Err(CompressionError::DataError("unexpected end of zlib stream".to_string()));
        }
    }

    if out.len() != expected_len {
        return Err(CompressionError::SizeMismatch {
            expected: expected_len,
            actual: out.len(),
        });
    }
    Ok((out, inflater.total_in() as usize))
}
