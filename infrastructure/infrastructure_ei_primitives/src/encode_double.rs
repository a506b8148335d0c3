//! Double Encoding Module
//!
//! Provides functionality to encode floating point values to EI format.
//!
//! Two layouts exist. `NEW_FLOAT_EXT` carries the exact IEEE-754 bits;
//! `FLOAT_EXT` carries the value as `%.20e` text in a NUL-padded 31-byte
//! field and is only produced when a peer needs it.
//!
//! Based on lib/erl_interface/src/encode/encode_double.c

use crate::constants::{ERL_FLOAT_EXT, FLOAT_EXT_PRECISION, FLOAT_EXT_WIDTH, NEW_FLOAT_EXT};
use crate::error::EncodeError;

/// Which float layout the encoder writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatFormat {
    /// `NEW_FLOAT_EXT`, 8-byte big-endian IEEE-754
    #[default]
    New,
    /// `FLOAT_EXT`, 31-byte ASCII text
    Old,
}

impl FloatFormat {
    /// Bytes the layout occupies, tag included
    pub fn encoded_len(self) -> usize {
        match self {
            FloatFormat::New => 1 + 8,
            FloatFormat::Old => 1 + FLOAT_EXT_WIDTH,
        }
    }
}

/// Encode a float in the requested layout
pub fn encode_double(buf: &mut Vec<u8>, value: f64, format: FloatFormat) -> Result<(), EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::InvalidValue(format!("{} is not a finite float", value)));
    }
    match format {
        FloatFormat::New => {
            buf.push(NEW_FLOAT_EXT);
            buf.extend_from_slice(&value.to_be_bytes());
        }
        FloatFormat::Old => {
            let text = format_old_float(value);
            buf.push(ERL_FLOAT_EXT);
            buf.extend_from_slice(text.as_bytes());
            buf.resize(buf.len() + FLOAT_EXT_WIDTH - text.len(), 0);
        }
    }
    Ok(())
}

/// Render `value` the way C's `%.20e` does
///
/// Rust writes the exponent as `e0` or `e-7`; C always writes a sign and at
/// least two digits (`e+00`, `e-07`). The longest result, a negative value
/// with a three-digit exponent, is 28 bytes and always fits the field.
pub fn format_old_float(value: f64) -> String {
    let rendered = format!("{:.*e}", FLOAT_EXT_PRECISION, value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => rendered,
    }
}
