//! Bignum Codec Module
//!
//! Provides integer encoding/decoding functionality.
//!
//! Encoding picks the narrowest form: `SMALL_INTEGER_EXT` for 0..=255,
//! `INTEGER_EXT` for the signed 32-bit range, and otherwise a sign byte plus
//! a little-endian magnitude in `SMALL_BIG_EXT` (up to 255 magnitude bytes)
//! or `LARGE_BIG_EXT`.
//!
//! Based on decode_big.c and encode_bignum.c

use entities_utilities::BigNumber;
use infrastructure_ei_primitives::constants::{ERL_LARGE_BIG_EXT, ERL_SMALL_BIG_EXT, MAX_U8_FIELD};
use infrastructure_ei_primitives::encode_headers::u32_field;
use infrastructure_ei_primitives::encode_integers::{encode_integer, encode_small_integer};
use infrastructure_ei_primitives::reader::{read_u32, read_u8, take};
use infrastructure_ei_primitives::{DecodeError, EncodeError};

/// Integer codec
pub struct BignumCodec;

impl BignumCodec {
    /// Encode an integer of any magnitude, tag included
    pub fn encode(buf: &mut Vec<u8>, value: &BigNumber) -> Result<(), EncodeError> {
        if let Some(small) = value.to_u8() {
            encode_small_integer(buf, small);
            return Ok(());
        }
        if let Some(medium) = value.to_i32() {
            encode_integer(buf, medium);
            return Ok(());
        }

        let (negative, magnitude) = value.to_sign_and_magnitude();
        if magnitude.len() <= MAX_U8_FIELD {
            buf.push(ERL_SMALL_BIG_EXT);
            buf.push(magnitude.len() as u8);
        } else {
            let len = u32_field(magnitude.len(), "LARGE_BIG_EXT")?;
            buf.push(ERL_LARGE_BIG_EXT);
            buf.extend_from_slice(&len.to_be_bytes());
        }
        buf.push(u8::from(negative));
        buf.extend_from_slice(&magnitude);
        Ok(())
    }

    /// Number of bytes `encode` writes for `value`
    pub fn encoded_len(value: &BigNumber) -> usize {
        if value.to_u8().is_some() {
            return 2;
        }
        if value.to_i32().is_some() {
            return 5;
        }
        let n = value.magnitude_len();
        if n <= MAX_U8_FIELD {
            1 + 1 + 1 + n
        } else {
            1 + 4 + 1 + n
        }
    }

    /// Decode the body of `SMALL_BIG_EXT`
    pub fn decode_small_big(buf: &[u8]) -> Result<(BigNumber, &[u8]), DecodeError> {
        let (len, rest) = read_u8(buf, "SMALL_BIG_EXT")?;
        Self::decode_magnitude(rest, len as usize, "SMALL_BIG_EXT")
    }

    /// Decode the body of `LARGE_BIG_EXT`
    pub fn decode_large_big(buf: &[u8]) -> Result<(BigNumber, &[u8]), DecodeError> {
        let (len, rest) = read_u32(buf, "LARGE_BIG_EXT")?;
        Self::decode_magnitude(rest, len as usize, "LARGE_BIG_EXT")
    }

    // Any non-zero sign byte is negative.
    fn decode_magnitude<'a>(buf: &'a [u8], len: usize, kind: &'static str) -> Result<(BigNumber, &'a [u8]), DecodeError> {
        let (sign, rest) = read_u8(buf, kind)?;
        let (magnitude, tail) = take(rest, len, kind)?;
        Ok((BigNumber::from_sign_and_magnitude(sign != 0, magnitude), tail))
    }
}
