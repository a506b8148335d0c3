//! Decode Term Module
//!
//! Provides functionality to decode EI-encoded terms.
//! Based on lib/erl_interface/src/misc/ei_decode_term.c
//!
//! Every decoder receives the input positioned at a tag and returns the
//! decoded term with the unconsumed tail. Composite terms thread the tail
//! through their elements, so a container consumes exactly its children.

use entities_data_handling::Term;
use infrastructure_bignum_encoding::BignumCodec;
use infrastructure_ei_primitives::constants::*;
use infrastructure_ei_primitives::decode_double::{decode_new_float, decode_old_float};
use infrastructure_ei_primitives::decode_headers::{
    decode_large_tuple_header, decode_list_header, decode_small_tuple_header, expect_nil,
};
use infrastructure_ei_primitives::decode_integers::{decode_integer, decode_small_integer};
use infrastructure_ei_primitives::reader::read_tag;
use infrastructure_ei_primitives::DecodeError;
use tracing::trace;

use crate::decode_atom::decode_atom;
use crate::decode_binary::{decode_binary, decode_string};

/// Decode one term from the front of `buf`
///
/// This is the main entry point for decoding EI terms.
/// It reads the term type tag and dispatches to appropriate decoders.
///
/// # Arguments
/// * `buf` - Buffer positioned at a term tag (after any magic byte)
///
/// # Returns
/// * `Ok((term, tail))` - Decoded term and the bytes after it
/// * `Err(DecodeError)` - The innermost decoding failure
pub fn decode_term(buf: &[u8]) -> Result<(Term, &[u8]), DecodeError> {
    let (tag, rest) = read_tag(buf)?;
    trace!(tag, remaining = rest.len(), "decoding term");

    match tag {
        ERL_SMALL_INTEGER_EXT => {
            let (value, tail) = decode_small_integer(rest)?;
            Ok((Term::from(value), tail))
        }
        ERL_INTEGER_EXT => {
            let (value, tail) = decode_integer(rest)?;
            Ok((Term::from(value), tail))
        }
        ERL_SMALL_BIG_EXT => {
            let (value, tail) = BignumCodec::decode_small_big(rest)?;
            Ok((Term::Integer(value), tail))
        }
        ERL_LARGE_BIG_EXT => {
            let (value, tail) = BignumCodec::decode_large_big(rest)?;
            Ok((Term::Integer(value), tail))
        }
        NEW_FLOAT_EXT => {
            let (value, tail) = decode_new_float(rest)?;
            Ok((Term::Float(value), tail))
        }
        ERL_FLOAT_EXT => {
            let (value, tail) = decode_old_float(rest)?;
            Ok((Term::Float(value), tail))
        }
        ERL_ATOM_EXT => {
            let (atom, tail) = decode_atom(rest)?;
            Ok((Term::Text(atom), tail))
        }
        ERL_BINARY_EXT => {
            let (text, tail) = decode_binary(rest)?;
            Ok((Term::Text(text), tail))
        }
        ERL_STRING_EXT => {
            let (text, tail) = decode_string(rest)?;
            Ok((Term::Text(text), tail))
        }
        ERL_SMALL_TUPLE_EXT => {
            let (arity, rest) = decode_small_tuple_header(rest)?;
            let (elements, tail) = decode_elements(arity, rest)?;
            Ok((Term::Tuple(elements), tail))
        }
        ERL_LARGE_TUPLE_EXT => {
            let (arity, rest) = decode_large_tuple_header(rest)?;
            let (elements, tail) = decode_elements(arity, rest)?;
            Ok((Term::Tuple(elements), tail))
        }
        ERL_LIST_EXT => {
            let (count, rest) = decode_list_header(rest)?;
            let (elements, rest) = decode_elements(count, rest)?;
            let tail = expect_nil(rest)?;
            Ok((Term::List(elements), tail))
        }
        ERL_NIL_EXT => Ok((Term::nil(), rest)),
        other => Err(DecodeError::InvalidTag(other)),
    }
}

// Each element takes at least one byte, so the remaining input bounds the
// capacity no matter what count the header claims.
fn decode_elements(count: usize, mut buf: &[u8]) -> Result<(Vec<Term>, &[u8]), DecodeError> {
    let mut elements = Vec::with_capacity(count.min(buf.len()));
    for _ in 0..count {
        let (element, tail) = decode_term(buf)?;
        elements.push(element);
        buf = tail;
    }
    Ok((elements, buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_small_integer() {
        let (term, tail) = decode_term(&[97, 20]).unwrap();
        assert_eq!(term, Term::from(20));
        assert!(tail.is_empty());
    }

    #[test]
    fn test_decode_tuple_leaves_following_nil() {
        let (term, tail) = decode_term(&[104, 1, 97, 1, 106]).unwrap();
        assert_eq!(term, Term::Tuple(vec![Term::from(1)]));
        assert_eq!(tail, &[106]);
    }

    #[test]
    fn test_decode_list() {
        let (term, tail) = decode_term(&[108, 0, 0, 0, 2, 97, 1, 97, 2, 106]).unwrap();
        assert_eq!(term, Term::List(vec![Term::from(1), Term::from(2)]));
        assert!(tail.is_empty());
    }

    #[test]
    fn test_decode_list_missing_nil() {
        assert!(matches!(
            decode_term(&[108, 0, 0, 0, 1, 97, 1]),
            Err(DecodeError::Truncated { .. })
        ));
        assert_eq!(
            decode_term(&[108, 0, 0, 0, 1, 97, 1, 97, 2]),
            Err(DecodeError::InvalidTag(97))
        );
    }

    #[test]
    fn test_decode_nil() {
        assert_eq!(decode_term(&[106]).unwrap().0, Term::nil());
    }

    #[test]
    fn test_decode_unknown_tags() {
        assert_eq!(decode_term(&[120]), Err(DecodeError::InvalidTag(120)));
        assert_eq!(decode_term(&[131, 97, 1]), Err(DecodeError::InvalidTag(131)));
        assert_eq!(decode_term(&[80, 0, 0, 0, 1]), Err(DecodeError::InvalidTag(80)));
    }

    #[test]
    fn test_decode_huge_count_does_not_allocate() {
        let buf = [105, 0xff, 0xff, 0xff, 0xff, 97, 1];
        assert!(matches!(decode_term(&buf), Err(DecodeError::Truncated { .. })));
        let buf = [108, 0xff, 0xff, 0xff, 0xff];
        assert!(matches!(decode_term(&buf), Err(DecodeError::Truncated { .. })));
    }

    #[test]
    fn test_decode_inner_error_propagates_unchanged() {
        let buf = [104, 2, 97, 1, 109, 0, 0, 0, 1, 0xff];
        assert!(matches!(decode_term(&buf), Err(DecodeError::InvalidValue(_))));
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(matches!(decode_term(&[]), Err(DecodeError::Truncated { .. })));
    }
}
