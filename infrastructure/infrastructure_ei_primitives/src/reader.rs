//! Reader Module
//!
//! Bounds-checked reads over a byte slice. Each function returns the value it
//! read together with the unconsumed tail, and reports a short read as
//! `DecodeError::Truncated` naming the field being read.

use crate::error::DecodeError;

/// Split `len` bytes off the front of `buf`
pub fn take<'a>(buf: &'a [u8], len: usize, kind: &'static str) -> Result<(&'a [u8], &'a [u8]), DecodeError> {
    if buf.len() < len {
        return Err(DecodeError::Truncated {
            kind,
            expected: len,
            actual: buf.len(),
        });
    }
    Ok(buf.split_at(len))
}

/// Read a fixed-size array
pub fn take_array<'a, const N: usize>(buf: &'a [u8], kind: &'static str) -> Result<([u8; N], &'a [u8]), DecodeError> {
    let (head, tail) = take(buf, N, kind)?;
    let mut out = [0u8; N];
    out.copy_from_slice(head);
    Ok((out, tail))
}

/// Read one unsigned byte
pub fn read_u8<'a>(buf: &'a [u8], kind: &'static str) -> Result<(u8, &'a [u8]), DecodeError> {
    let (bytes, tail) = take_array::<1>(buf, kind)?;
    Ok((bytes[0], tail))
}

/// Read a big-endian u16
pub fn read_u16<'a>(buf: &'a [u8], kind: &'static str) -> Result<(u16, &'a [u8]), DecodeError> {
    let (bytes, tail) = take_array::<2>(buf, kind)?;
    Ok((u16::from_be_bytes(bytes), tail))
}

/// Read a big-endian u32
pub fn read_u32<'a>(buf: &'a [u8], kind: &'static str) -> Result<(u32, &'a [u8]), DecodeError> {
    let (bytes, tail) = take_array::<4>(buf, kind)?;
    Ok((u32::from_be_bytes(bytes), tail))
}

/// Read a big-endian two's-complement i32
pub fn read_i32<'a>(buf: &'a [u8], kind: &'static str) -> Result<(i32, &'a [u8]), DecodeError> {
    let (bytes, tail) = take_array::<4>(buf, kind)?;
    Ok((i32::from_be_bytes(bytes), tail))
}

/// Read the tag byte that opens every term
pub fn read_tag(buf: &[u8]) -> Result<(u8, &[u8]), DecodeError> {
    read_u8(buf, "term tag")
}

/// Read a u32 length prefix and the bytes it announces
pub fn read_u32_prefixed<'a>(buf: &'a [u8], kind: &'static str) -> Result<(&'a [u8], &'a [u8]), DecodeError> {
    let (len, rest) = read_u32(buf, kind)?;
    take(rest, len as usize, kind)
}

/// Read a u16 length prefix and the bytes it announces
pub fn read_u16_prefixed<'a>(buf: &'a [u8], kind: &'static str) -> Result<(&'a [u8], &'a [u8]), DecodeError> {
    let (len, rest) = read_u16(buf, kind)?;
    take(rest, len as usize, kind)
}
