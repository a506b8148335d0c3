//! Decoding Module
//!
//! Provides top-level decoding for external term format.
//! Based on erts_binary_to_term() and erts_decode_ext() from external.c
//!
//! A buffer is the version magic byte followed by either a plain term or a
//! compressed envelope. The inflated envelope body may carry its own magic
//! byte or start directly at a term tag; both are accepted since 131 is never
//! a term tag. Envelopes do not nest.

use entities_data_handling::Term;
use infrastructure_data_handling::decode_term;
use infrastructure_ei_primitives::constants::{COMPRESSED_EXT, VERSION_MAGIC};
use infrastructure_ei_primitives::reader::{read_u32, read_u8};
use infrastructure_ei_primitives::DecodeError;
use infrastructure_utilities::zlib_decompress;
use tracing::{debug, trace};

/// Decode one magic-prefixed term, returning the bytes after it
///
/// Based on `erts_decode_ext()` from external.c. Consecutive terms in one
/// buffer can be read by feeding the returned tail back in.
///
/// # Arguments
/// * `data` - Buffer starting with the version magic byte
///
/// # Returns
/// * `Ok((term, tail))` - Decoded term and the unconsumed input
/// * `Err(DecodeError)` - Decoding error
pub fn erts_decode_ext(data: &[u8]) -> Result<(Term, &[u8]), DecodeError> {
    decode_ext(data).inspect_err(|err| debug!(error = %err, len = data.len(), "decode failed"))
}

/// Decode a buffer that holds exactly one magic-prefixed term
///
/// Based on `erts_binary_to_term()` from external.c. Leftover bytes are
/// reported as `DecodeError::TrailingBytes`.
pub fn erts_decode_ext_exact(data: &[u8]) -> Result<Term, DecodeError> {
    let (term, tail) = erts_decode_ext(data)?;
    if !tail.is_empty() {
        debug!(trailing = tail.len(), "decode failed");
        return Err(DecodeError::TrailingBytes(tail.len()));
    }
    Ok(term)
}

fn decode_ext(data: &[u8]) -> Result<(Term, &[u8]), DecodeError> {
    let rest = match data.split_first() {
        Some((&VERSION_MAGIC, rest)) => rest,
        Some((&other, _)) => return Err(DecodeError::InvalidMagic(Some(other))),
        None => return Err(DecodeError::InvalidMagic(None)),
    };

    if rest.first() != Some(&COMPRESSED_EXT) {
        return decode_term(rest);
    }

    let (_, rest) = read_u8(rest, "COMPRESSED_EXT")?;
    let (declared, rest) = read_u32(rest, "COMPRESSED_EXT")?;
    let (inflated, consumed) =
        zlib_decompress(rest, declared as usize).map_err(|e| DecodeError::DecompressionFailed(e.to_string()))?;
    trace!(declared, consumed, "inflated compressed term");

    let body = match inflated.split_first() {
        Some((&VERSION_MAGIC, body)) => body,
        _ => &inflated[..],
    };
    let (term, leftover) = decode_term(body)?;
    if !leftover.is_empty() {
        return Err(DecodeError::TrailingBytes(leftover.len()));
    }
    Ok((term, &rest[consumed..]))
}
