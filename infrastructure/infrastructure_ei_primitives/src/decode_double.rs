//! Double Decoding Module
//!
//! Based on lib/erl_interface/src/decode/decode_double.c

use crate::constants::FLOAT_EXT_WIDTH;
use crate::error::DecodeError;
use crate::reader::take_array;

/// Decode the body of `NEW_FLOAT_EXT`
pub fn decode_new_float(buf: &[u8]) -> Result<(f64, &[u8]), DecodeError> {
    let (bytes, tail) = take_array::<8>(buf, "NEW_FLOAT_EXT")?;
    Ok((f64::from_be_bytes(bytes), tail))
}

/// Decode the body of `FLOAT_EXT`
///
/// The text ends at the first NUL of the 31-byte field.
pub fn decode_old_float(buf: &[u8]) -> Result<(f64, &[u8]), DecodeError> {
    let (field, tail) = take_array::<FLOAT_EXT_WIDTH>(buf, "FLOAT_EXT")?;
    let end = field.iter().position(|&b| b == 0).unwrap_or(FLOAT_EXT_WIDTH);
    let text = std::str::from_utf8(&field[..end])
        .map_err(|_| DecodeError::InvalidValue("float text is not ASCII".to_string()))?;
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| DecodeError::InvalidValue(format!("unparsable float text {:?}", text)))?;
    if !value.is_finite() {
        return Err(DecodeError::InvalidValue(format!("float text {:?} is not finite", text)));
    }
    Ok((value, tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn old_field(text: &str) -> Vec<u8> {
        let mut field = text.as_bytes().to_vec();
        field.resize(FLOAT_EXT_WIDTH, 0);
        field
    }

    #[test]
    fn test_decode_new_float() {
        let mut buf = 1.5f64.to_be_bytes().to_vec();
        buf.push(106);
        let (value, tail) = decode_new_float(&buf).unwrap();
        assert_eq!(value, 1.5);
        assert_eq!(tail, &[106]);
    }

    #[test]
    fn test_decode_old_float() {
        let field = old_field("3.14000000000000012434e+00");
        let (value, tail) = decode_old_float(&field).unwrap();
        assert_eq!(value, 3.14);
        assert!(tail.is_empty());
    }

    #[test]
    fn test_decode_old_float_garbage_after_nul_is_ignored() {
        let mut field = old_field("2.5e+00");
        field[10] = b'x';
        assert_eq!(decode_old_float(&field).unwrap().0, 2.5);
    }

    #[test]
    fn test_decode_old_float_unparsable() {
        assert!(matches!(
            decode_old_float(&old_field("not a float")),
            Err(DecodeError::InvalidValue(_))
        ));
        assert!(matches!(
            decode_old_float(&old_field("inf")),
            Err(DecodeError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_decode_floats_truncated() {
        assert_eq!(
            decode_new_float(&[0; 7]),
            Err(DecodeError::Truncated {
                kind: "NEW_FLOAT_EXT",
                expected: 8,
                actual: 7
            })
        );
        assert!(matches!(
            decode_old_float(&[b'1'; 30]),
            Err(DecodeError::Truncated { expected: 31, actual: 30, .. })
        ));
    }
}
