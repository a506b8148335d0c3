//! Size Calculation Module
//!
//! Provides size calculation functions for external term format encoding.
//! Based on erts_encode_ext_size() and encode_size_struct_int() from external.c
//!
//! Sizes describe the uncompressed encoding. They are exact for every term
//! that encodes successfully; a term that fails to encode still gets the
//! size its layout would have had.

use entities_data_handling::atom::atom_name;
use entities_data_handling::Term;
use infrastructure_bignum_encoding::BignumCodec;
use infrastructure_ei_primitives::constants::MAX_U8_FIELD;
use infrastructure_ei_primitives::FloatFormat;

use crate::options::EncodeOptions;

/// Calculate the size needed to encode a term in external format
///
/// Based on `erts_encode_ext_size()` from external.c. Includes the version
/// magic byte and ignores `options.compression`.
///
/// # Arguments
/// * `term` - The term to calculate size for
/// * `options` - Encoder options; only the float layout affects the size
///
/// # Returns
/// Size in bytes of the plain encoding
pub fn erts_encode_ext_size(term: &Term, options: &EncodeOptions) -> usize {
    1 + encode_size_struct_int(term, options.float_format)
}

/// Calculate the size needed to encode a term structure (without version byte)
///
/// Based on `encode_size_struct_int()` from external.c.
pub fn encode_size_struct_int(term: &Term, float_format: FloatFormat) -> usize {
    if let Some(name) = atom_name(term) {
        return 1 + 2 + name.len();
    }
    match term {
        Term::Integer(n) => BignumCodec::encoded_len(n),
        Term::Float(_) => float_format.encoded_len(),
        Term::Text(text) => 1 + 4 + text.len(),
        Term::Bytes(bytes) => 1 + 4 + bytes.len(),
        Term::Tuple(elements) | Term::Set(elements) => {
            let header = if elements.len() <= MAX_U8_FIELD { 2 } else { 5 };
            header + elements_size(elements, float_format)
        }
        Term::List(elements) if elements.is_empty() => 1,
        Term::List(elements) => 5 + elements_size(elements, float_format) + 1,
    }
}

fn elements_size(elements: &[Term], float_format: FloatFormat) -> usize {
    elements
        .iter()
        .map(|element| encode_size_struct_int(element, float_format))
        .sum()
}
