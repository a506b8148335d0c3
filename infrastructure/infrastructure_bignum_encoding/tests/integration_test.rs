//! Integration tests for infrastructure_bignum_encoding crate
//!
//! These tests verify that integers of every width survive an encode and
//! decode through the tag byte the codec picked.

use entities_utilities::BigNumber;
use infrastructure_bignum_encoding::*;
use infrastructure_ei_primitives::constants::*;
use infrastructure_ei_primitives::decode_integers::{decode_integer, decode_small_integer};
use infrastructure_ei_primitives::DecodeError;

fn roundtrip(value: &BigNumber) -> BigNumber {
    let mut buf = Vec::new();
    BignumCodec::encode(&mut buf, value).unwrap();
    let (decoded, tail) = match buf[0] {
        ERL_SMALL_INTEGER_EXT => {
            let (v, t) = decode_small_integer(&buf[1..]).unwrap();
            (BigNumber::from(v), t)
        }
        ERL_INTEGER_EXT => {
            let (v, t) = decode_integer(&buf[1..]).unwrap();
            (BigNumber::from(v), t)
        }
        ERL_SMALL_BIG_EXT => BignumCodec::decode_small_big(&buf[1..]).unwrap(),
        ERL_LARGE_BIG_EXT => BignumCodec::decode_large_big(&buf[1..]).unwrap(),
        other => panic!("unexpected tag {}", other),
    };
    assert!(tail.is_empty());
    decoded
}

#[test]
fn test_boundary_values_roundtrip() {
    let values = [
        BigNumber::from(0),
        BigNumber::from(255),
        BigNumber::from(256),
        BigNumber::from(i32::MAX),
        BigNumber::from(i32::MAX as i64 + 1),
        BigNumber::from(i32::MIN),
        BigNumber::from(i32::MIN as i64 - 1),
        BigNumber::from(i64::MIN),
        BigNumber::from(u128::MAX),
    ];
    for value in &values {
        assert_eq!(&roundtrip(value), value);
    }
}

#[test]
fn test_huge_values_roundtrip() {
    let huge = BigNumber::from(3).pow(5000);
    assert_eq!(roundtrip(&huge), huge);
    let negative = BigNumber::from(0).minus(&huge);
    assert_eq!(roundtrip(&negative), negative);
}

#[test]
fn test_every_truncation_fails() {
    let value = BigNumber::from(7).pow(300);
    let mut buf = Vec::new();
    BignumCodec::encode(&mut buf, &value).unwrap();
    let body = &buf[1..];
    for cut in 0..body.len() {
        let result = if buf[0] == ERL_SMALL_BIG_EXT {
            BignumCodec::decode_small_big(&body[..cut])
        } else {
            BignumCodec::decode_large_big(&body[..cut])
        };
        assert!(matches!(result, Err(DecodeError::Truncated { .. })), "cut {}", cut);
    }
}
