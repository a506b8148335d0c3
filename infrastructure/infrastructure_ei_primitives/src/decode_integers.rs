//! Integer Decoding Module
//!
//! Based on lib/erl_interface/src/decode/decode_long.c

use crate::error::DecodeError;
use crate::reader::{read_i32, read_u8};

/// Decode the body of `SMALL_INTEGER_EXT`
pub fn decode_small_integer(buf: &[u8]) -> Result<(u8, &[u8]), DecodeError> {
    read_u8(buf, "SMALL_INTEGER_EXT")
}

/// Decode the body of `INTEGER_EXT`
pub fn decode_integer(buf: &[u8]) -> Result<(i32, &[u8]), DecodeError> {
    read_i32(buf, "INTEGER_EXT")
}
