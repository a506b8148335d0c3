//! Encode Binary Module
//!
//! Provides functionality to encode binaries to EI format.
//! Based on lib/erl_interface/src/encode/encode_binary.c

use infrastructure_ei_primitives::constants::ERL_BINARY_EXT;
use infrastructure_ei_primitives::encode_headers::u32_field;
use infrastructure_ei_primitives::EncodeError;

/// Encode a binary as `BINARY_EXT`
///
/// # Arguments
/// * `buf` - Buffer to write encoded data to
/// * `data` - Binary data to encode; may be empty
///
/// # Returns
/// * `Ok(())` - The binary was appended to `buf`
/// * `Err(EncodeError::LengthOverflow)` - `data` does not fit a 4-byte length
pub fn encode_binary(buf: &mut Vec<u8>, data: &[u8]) -> Result<(), EncodeError> {
    let len = u32_field(data.len(), "BINARY_EXT")?;
    buf.push(ERL_BINARY_EXT);
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(data);
    Ok(())
}
