//! Codec Facades
//!
//! The `term_to_binary` / `binary_to_term` pair and its variants.

use entities_data_handling::Term;
use infrastructure_ei_primitives::{DecodeError, EncodeError};
use infrastructure_external_format::{
    erts_decode_ext, erts_decode_ext_exact, erts_encode_ext, erts_encode_ext_size, EncodeOptions,
};
use tracing::debug;

/// Encode a term as a magic-prefixed, uncompressed buffer
pub fn encode(term: &Term) -> Result<Vec<u8>, EncodeError> {
    encode_with(term, &EncodeOptions::new())
}

/// Encode a term inside a zlib envelope at `level` (0 through 9)
///
/// Falls back to the plain encoding when compression does not make the
/// buffer smaller.
pub fn encode_compressed(term: &Term, level: u32) -> Result<Vec<u8>, EncodeError> {
    let options = EncodeOptions::new().with_compression_level(level)?;
    encode_with(term, &options)
}

/// Encode a term with explicit options
pub fn encode_with(term: &Term, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    debug!(?options, kind = term.kind(), "encode");
    erts_encode_ext(term, options)
}

/// Decode a buffer that holds exactly one term
pub fn decode(buffer: &[u8]) -> Result<Term, DecodeError> {
    erts_decode_ext_exact(buffer)
}

/// Decode the first term of `buffer` and return the bytes after it
pub fn decode_partial(buffer: &[u8]) -> Result<(Term, &[u8]), DecodeError> {
    erts_decode_ext(buffer)
}

/// Exact size of the uncompressed encoding, magic byte included
pub fn encoded_size(term: &Term, options: &EncodeOptions) -> usize {
    erts_encode_ext_size(term, options)
}
