//! Integer Encoding Module
//!
//! Writes the two fixed-width integer kinds. Values outside the signed
//! 32-bit range go through the big-integer codec instead.
//!
//! Based on lib/erl_interface/src/encode/encode_long.c

use crate::constants::{ERL_INTEGER_EXT, ERL_SMALL_INTEGER_EXT};

/// Write `SMALL_INTEGER_EXT`: tag plus one unsigned byte
pub fn encode_small_integer(buf: &mut Vec<u8>, value: u8) {
    buf.push(ERL_SMALL_INTEGER_EXT);
    buf.push(value);
}

/// Write `INTEGER_EXT`: tag plus a big-endian two's-complement i32
pub fn encode_integer(buf: &mut Vec<u8>, value: i32) {
    buf.push(ERL_INTEGER_EXT);
    buf.extend_from_slice(&value.to_be_bytes());
}

/// Pick the smallest fixed-width layout for `value`
pub fn encode_fixed_integer(buf: &mut Vec<u8>, value: i32) {
    match u8::try_from(value) {
        Ok(small) => encode_small_integer(buf, small),
        Err(_) => encode_integer(buf, value),
    }
}
