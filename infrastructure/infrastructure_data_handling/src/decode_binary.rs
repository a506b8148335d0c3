//! Decode Binary Module
//!
//! Provides functionality to decode EI-encoded binaries and legacy strings.
//! Both decode to UTF-8 text.
//! Based on lib/erl_interface/src/decode/decode_binary.c and decode_string.c

use infrastructure_ei_primitives::reader::{read_u16_prefixed, read_u32_prefixed};
use infrastructure_ei_primitives::DecodeError;

/// Decode the body of `BINARY_EXT`
///
/// # Arguments
/// * `buf` - Bytes following the tag
///
/// # Returns
/// * `Ok((text, tail))` - Decoded text and the unconsumed input
/// * `Err(DecodeError)` - Truncated input or invalid UTF-8
pub fn decode_binary(buf: &[u8]) -> Result<(String, &[u8]), DecodeError> {
    let (data, tail) = read_u32_prefixed(buf, "BINARY_EXT")?;
    Ok((utf8(data, "BINARY_EXT")?, tail))
}

/// Decode the body of `STRING_EXT`
///
/// The 2-byte length caps the payload at 65535 bytes.
pub fn decode_string(buf: &[u8]) -> Result<(String, &[u8]), DecodeError> {
    let (data, tail) = read_u16_prefixed(buf, "STRING_EXT")?;
    Ok((utf8(data, "STRING_EXT")?, tail))
}

fn utf8(data: &[u8], kind: &str) -> Result<String, DecodeError> {
    String::from_utf8(data.to_vec())
        .map_err(|e| DecodeError::InvalidValue(format!("{} payload is not UTF-8: {}", kind, e)))
}
