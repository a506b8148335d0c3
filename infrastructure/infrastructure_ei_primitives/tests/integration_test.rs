//! Integration tests for infrastructure_ei_primitives crate
//!
//! These tests chain the fixed-width codecs the way the term codec does:
//! the tail returned by one decoder feeds the next.

use infrastructure_ei_primitives::constants::*;
use infrastructure_ei_primitives::decode_double::*;
use infrastructure_ei_primitives::decode_headers::*;
use infrastructure_ei_primitives::decode_integers::*;
use infrastructure_ei_primitives::encode_double::*;
use infrastructure_ei_primitives::encode_headers::*;
use infrastructure_ei_primitives::encode_integers::*;
use infrastructure_ei_primitives::reader::read_tag;
use infrastructure_ei_primitives::DecodeError;

#[test]
fn test_tuple_of_primitives_threads_tail() {
    let mut buf = Vec::new();
    encode_tuple_header(&mut buf, 3).unwrap();
    encode_fixed_integer(&mut buf, 1);
    encode_fixed_integer(&mut buf, -5);
    encode_double(&mut buf, 0.5, FloatFormat::New).unwrap();

    let (tag, rest) = read_tag(&buf).unwrap();
    assert_eq!(tag, ERL_SMALL_TUPLE_EXT);
    let (arity, rest) = decode_small_tuple_header(rest).unwrap();
    assert_eq!(arity, 3);

    let (tag, rest) = read_tag(rest).unwrap();
    assert_eq!(tag, ERL_SMALL_INTEGER_EXT);
    let (first, rest) = decode_small_integer(rest).unwrap();
    assert_eq!(first, 1);

    let (tag, rest) = read_tag(rest).unwrap();
    assert_eq!(tag, ERL_INTEGER_EXT);
    let (second, rest) = decode_integer(rest).unwrap();
    assert_eq!(second, -5);

    let (tag, rest) = read_tag(rest).unwrap();
    assert_eq!(tag, NEW_FLOAT_EXT);
    let (third, rest) = decode_new_float(rest).unwrap();
    assert_eq!(third, 0.5);
    assert!(rest.is_empty());
}

#[test]
fn test_old_float_roundtrip() {
    for value in [0.0, 3.14, -2.5e-8, 1.0e300, f64::MIN_POSITIVE] {
        let mut buf = Vec::new();
        encode_double(&mut buf, value, FloatFormat::Old).unwrap();
        assert_eq!(buf.len(), FloatFormat::Old.encoded_len());
        let (decoded, rest) = decode_old_float(&buf[1..]).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }
}

#[test]
fn test_list_requires_terminator() {
    let mut buf = Vec::new();
    encode_list_header(&mut buf, 1).unwrap();
    encode_small_integer(&mut buf, 7);

    let (count, rest) = decode_list_header(&buf[1..]).unwrap();
    assert_eq!(count, 1);
    let (_, rest) = read_tag(rest).unwrap();
    let (_, rest) = decode_small_integer(rest).unwrap();
    assert!(matches!(expect_nil(rest), Err(DecodeError::Truncated { .. })));

    encode_nil(&mut buf);
    assert!(expect_nil(&buf[buf.len() - 1..]).unwrap().is_empty());
}
