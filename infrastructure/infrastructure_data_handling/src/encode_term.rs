//! Encode Term Module
//!
//! Recursively encodes a `Term` to EI format, without the version magic byte.
//! Based on lib/erl_interface/src/misc/ei_x_encode.c

use entities_data_handling::atom::atom_name;
use entities_data_handling::Term;
use infrastructure_bignum_encoding::BignumCodec;
use infrastructure_ei_primitives::encode_double::encode_double;
use infrastructure_ei_primitives::encode_headers::{encode_list_header, encode_nil, encode_tuple_header};
use infrastructure_ei_primitives::{EncodeError, FloatFormat};
use tracing::trace;

use crate::encode_atom::encode_atom;
use crate::encode_binary::encode_binary;

/// Encode a term, appending its bytes to `buf`
///
/// # Arguments
/// * `buf` - Buffer to write encoded data to
/// * `term` - Term to encode
/// * `float_format` - Layout used for every float inside `term`
///
/// # Returns
/// * `Ok(())` - The term was appended to `buf`
/// * `Err(EncodeError)` - The first element that could not be encoded
///
/// On error `buf` may hold a partial encoding.
pub fn encode_term(buf: &mut Vec<u8>, term: &Term, float_format: FloatFormat) -> Result<(), EncodeError> {
    trace!(kind = term.kind(), offset = buf.len(), "encoding term");

    if let Some(name) = atom_name(term) {
        return encode_atom(buf, name);
    }

    match term {
        Term::Integer(n) => BignumCodec::encode(buf, n),
        Term::Float(x) => encode_double(buf, *x, float_format),
        Term::Text(text) => encode_binary(buf, text.as_bytes()),
        Term::Bytes(bytes) => encode_binary(buf, bytes),
        Term::Tuple(elements) | Term::Set(elements) => {
            encode_tuple_header(buf, elements.len())?;
            encode_elements(buf, elements, float_format)
        }
        Term::List(elements) if elements.is_empty() => {
            encode_nil(buf);
            Ok(())
        }
        Term::List(elements) => {
            encode_list_header(buf, elements.len())?;
            encode_elements(buf, elements, float_format)?;
            encode_nil(buf);
            Ok(())
        }
    }
}

fn encode_elements(buf: &mut Vec<u8>, elements: &[Term], float_format: FloatFormat) -> Result<(), EncodeError> {
    for element in elements {
        encode_term(buf, element, float_format)?;
    }
    Ok(())
}
