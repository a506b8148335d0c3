//! Encoder Options Module
//!
//! The settings `term_to_binary/2` takes as an option list, expressed as a
//! builder. The default encodes uncompressed with `NEW_FLOAT_EXT`.

use infrastructure_ei_primitives::{EncodeError, FloatFormat};
use infrastructure_utilities::CompressionLevel;

/// Encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Wrap the encoding in a zlib envelope at this level
    pub compression: Option<CompressionLevel>,
    /// Float layout
    pub float_format: FloatFormat,
}

impl EncodeOptions {
    /// Uncompressed, new floats
    pub fn new() -> Self {
        Self::default()
    }

    /// Compress at a validated level
    pub fn compressed(mut self, level: CompressionLevel) -> Self {
        self.compression = Some(level);
        self
    }

    /// Compress at a numeric level, rejecting anything outside 0..=9
    pub fn with_compression_level(self, level: u32) -> Result<Self, EncodeError> {
        let level = CompressionLevel::new(level).map_err(|e| EncodeError::InvalidValue(e.to_string()))?;
        Ok(self.compressed(level))
    }

    /// Choose the float layout
    pub fn with_float_format(mut self, float_format: FloatFormat) -> Self {
        self.float_format = float_format;
        self
    }

    /// Shorthand for `FLOAT_EXT`, the `{minor_version, 0}` option
    pub fn old_floats(self) -> Self {
        self.with_float_format(FloatFormat::Old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EncodeOptions::new();
        assert_eq!(options.compression, None);
        assert_eq!(options.float_format, FloatFormat::New);
    }

    #[test]
    fn test_builder() {
        let options = EncodeOptions::new()
            .with_compression_level(9)
            .unwrap()
            .old_floats();
        assert_eq!(options.compression, Some(CompressionLevel::BEST_COMPRESSION));
        assert_eq!(options.float_format, FloatFormat::Old);
    }

    #[test]
    fn test_invalid_level() {
        assert!(matches!(
            EncodeOptions::new().with_compression_level(10),
            Err(EncodeError::InvalidValue(_))
        ));
    }
}
