//! Encoding Module
//!
//! Provides top-level encoding for external term format.
//! Based on erts_term_to_binary() and erts_encode_ext() from external.c

use entities_data_handling::Term;
use infrastructure_data_handling::encode_term;
use infrastructure_ei_primitives::constants::{COMPRESSED_EXT, VERSION_MAGIC};
use infrastructure_ei_primitives::encode_headers::u32_field;
use infrastructure_ei_primitives::EncodeError;
use infrastructure_utilities::{zlib_compress, CompressionLevel};
use tracing::debug;

use crate::options::EncodeOptions;
use crate::size_calculation::erts_encode_ext_size;

/// Encode a term to external format
///
/// Based on `erts_term_to_binary()` from external.c. The result starts with
/// the version magic byte (131). When `options.compression` is set, the
/// complete plain encoding is deflated and wrapped as
/// `131, 'P', u32 uncompressed size, zlib stream`; if that is not smaller
/// than the plain encoding, the plain encoding is returned instead.
///
/// # Arguments
/// * `term` - The term to encode
/// * `options` - Compression and float layout
///
/// # Returns
/// * `Ok(Vec<u8>)` - Encoded bytes in ETF format
/// * `Err(EncodeError)` - The first element that could not be encoded
pub fn erts_encode_ext(term: &Term, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    let size = erts_encode_ext_size(term, options);
    let mut buf = Vec::with_capacity(size);
    buf.push(VERSION_MAGIC);
    encode_term(&mut buf, term, options.float_format)?;
    debug!(kind = term.kind(), size = buf.len(), "encoded term");

    match options.compression {
        Some(level) => compress_envelope(buf, level),
        None => Ok(buf),
    }
}

fn compress_envelope(plain: Vec<u8>, level: CompressionLevel) -> Result<Vec<u8>, EncodeError> {
    let uncompressed_len = u32_field(plain.len(), "COMPRESSED_EXT")?;
    let body = zlib_compress(&plain, level).map_err(|e| EncodeError::CompressionFailed(e.to_string()))?;

    let envelope_len = 1 + 1 + 4 + body.len();
    if envelope_len >= plain.len() {
        debug!(
            plain = plain.len(),
            compressed = envelope_len,
            level = level.level(),
            "compression did not shrink term, keeping plain encoding"
        );
        return Ok(plain);
    }

    let mut envelope = Vec::with_capacity(envelope_len);
    envelope.push(VERSION_MAGIC);
    envelope.push(COMPRESSED_EXT);
    envelope.extend_from_slice(&uncompressed_len.to_be_bytes());
    envelope.extend_from_slice(&body);
    debug!(
        plain = plain.len(),
        compressed = envelope.len(),
        level = level.level(),
        "compressed term"
    );
    Ok(envelope)
}
