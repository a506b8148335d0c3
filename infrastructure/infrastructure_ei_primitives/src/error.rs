//! Error Module
//!
//! The single error taxonomy shared by every layer of the codec. Encoders
//! report `EncodeError`, decoders report `DecodeError`. Neither is ever
//! recovered from inside the codec: the innermost failure travels unchanged
//! through every enclosing container to the caller.

use entities_data_handling::AtomError;
use thiserror::Error;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The host value has no encoding rule
    #[error("Unknown datatype: {0}")]
    UnsupportedType(String),

    /// A length or count does not fit its wire field
    #[error("Invalid {kind} length: {length}")]
    LengthOverflow { kind: &'static str, length: usize },

    /// The value is malformed, such as an empty atom or a non-finite float
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// The compressor failed
    #[error("Compression failed: {0}")]
    CompressionFailed(String),
}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A field declares more bytes than the input holds
    #[error("Incomplete {kind} length: expected {expected}, got {actual}")]
    Truncated {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Unrecognized or misplaced tag byte
    #[error("Invalid term type: {0}")]
    InvalidTag(u8),

    /// Missing or incorrect version byte
    #[error("Invalid external term format version: {0:?}")]
    InvalidMagic(Option<u8>),

    /// Field content is malformed (bad UTF-8, unparsable float text)
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// A declared length exceeds what the field allows
    #[error("Invalid {kind} length: {length}")]
    LengthOverflow { kind: &'static str, length: usize },

    /// Inflate failed or produced the wrong number of bytes
    #[error("Decompression failed: {0}")]
    DecompressionFailed(String),

    /// Bytes remain after a complete top-level term
    #[error("{0} trailing bytes after term")]
    TrailingBytes(usize),
}

impl From<AtomError> for EncodeError {
    fn from(err: AtomError) -> Self {
        match err {
            AtomError::InvalidValue(msg) => EncodeError::InvalidValue(msg),
        }
    }
}

impl From<AtomError> for DecodeError {
    fn from(err: AtomError) -> Self {
        match err {
            AtomError::InvalidValue(msg) => DecodeError::InvalidValue(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_message_names_counts() {
        let err = DecodeError::Truncated {
            kind: "INT_EXT",
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Incomplete INT_EXT length: expected 4, got 3");
    }

    #[test]
    fn test_length_overflow_message() {
        let err = EncodeError::LengthOverflow {
            kind: "ATOM_EXT",
            length: 256,
        };
        assert_eq!(err.to_string(), "Invalid ATOM_EXT length: 256");
    }

    #[test]
    fn test_atom_error_conversion() {
        let err: EncodeError = AtomError::InvalidValue("foo".to_string()).into();
        assert_eq!(err, EncodeError::InvalidValue("foo".to_string()));
        let err: DecodeError = AtomError::InvalidValue("foo".to_string()).into();
        assert_eq!(err, DecodeError::InvalidValue("foo".to_string()));
    }

    #[test]
    fn test_invalid_magic_message() {
        assert!(DecodeError::InvalidMagic(Some(132)).to_string().contains("132"));
        assert!(DecodeError::InvalidMagic(None).to_string().contains("None"));
    }
}
