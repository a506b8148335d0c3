//! Header Encoding Module
//!
//! Writes the headers that open composite terms. Elements are written by the
//! caller right after the header.
//!
//! Based on lib/erl_interface/src/encode/encode_tuple_header.c and
//! encode_list_header.c

use crate::constants::{
    ERL_LARGE_TUPLE_EXT, ERL_LIST_EXT, ERL_NIL_EXT, ERL_SMALL_TUPLE_EXT, MAX_U32_FIELD, MAX_U8_FIELD,
};
use crate::error::EncodeError;

/// Encode a tuple header, choosing the small form for arity <= 255
pub fn encode_tuple_header(buf: &mut Vec<u8>, arity: usize) -> Result<(), EncodeError> {
    if arity <= MAX_U8_FIELD {
        buf.push(ERL_SMALL_TUPLE_EXT);
        buf.push(arity as u8);
        return Ok(());
    }
    let arity = u32_field(arity, "LARGE_TUPLE_EXT")?;
    buf.push(ERL_LARGE_TUPLE_EXT);
    buf.extend_from_slice(&arity.to_be_bytes());
    Ok(())
}

/// Encode a list header for a non-empty list
///
/// The caller writes the elements and then the terminating nil.
pub fn encode_list_header(buf: &mut Vec<u8>, count: usize) -> Result<(), EncodeError> {
    let count = u32_field(count, "LIST_EXT")?;
    buf.push(ERL_LIST_EXT);
    buf.extend_from_slice(&count.to_be_bytes());
    Ok(())
}

/// Encode nil
pub fn encode_nil(buf: &mut Vec<u8>) {
    buf.push(ERL_NIL_EXT);
}

/// Check that a length fits a 4-byte field
pub fn u32_field(length: usize, kind: &'static str) -> Result<u32, EncodeError> {
    if length > MAX_U32_FIELD {
        return Err(EncodeError::LengthOverflow { kind, length });
    }
    Ok(length as u32)
}
