//! Header Decoding Module
//!
//! Each function takes the bytes after the tag and returns the element count
//! along with the tail that holds the elements.
//!
//! Based on lib/erl_interface/src/decode/decode_tuple_header.c and
//! decode_list_header.c

use crate::constants::ERL_NIL_EXT;
use crate::error::DecodeError;
use crate::reader::{read_u32, read_u8};

/// Decode the arity of `SMALL_TUPLE_EXT`
pub fn decode_small_tuple_header(buf: &[u8]) -> Result<(usize, &[u8]), DecodeError> {
    let (arity, tail) = read_u8(buf, "SMALL_TUPLE_EXT")?;
    Ok((arity as usize, tail))
}

/// Decode the arity of `LARGE_TUPLE_EXT`
pub fn decode_large_tuple_header(buf: &[u8]) -> Result<(usize, &[u8]), DecodeError> {
    let (arity, tail) = read_u32(buf, "LARGE_TUPLE_EXT")?;
    Ok((arity as usize, tail))
}

/// Decode the element count of `LIST_EXT`
pub fn decode_list_header(buf: &[u8]) -> Result<(usize, &[u8]), DecodeError> {
    let (count, tail) = read_u32(buf, "LIST_EXT")?;
    Ok((count as usize, tail))
}

/// Consume the nil that terminates a proper list
///
/// Improper lists are outside the supported grammar, so any other tag is
/// reported as invalid.
pub fn expect_nil(buf: &[u8]) -> Result<&[u8], DecodeError> {
    let (tag, tail) = read_u8(buf, "LIST_EXT tail")?;
    if tag != ERL_NIL_EXT {
        return Err(DecodeError::InvalidTag(tag));
    }
    Ok(tail)
}
