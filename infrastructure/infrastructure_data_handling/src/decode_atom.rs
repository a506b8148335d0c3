//! Decode Atom Module
//!
//! Provides functionality to decode EI-encoded atoms.
//! Based on lib/erl_interface/src/decode/decode_atom.c

use entities_data_handling::atom::ATOM_SIGIL;
use infrastructure_ei_primitives::reader::read_u16_prefixed;
use infrastructure_ei_primitives::DecodeError;

/// Decode the body of `ATOM_EXT` into its sigil form
///
/// A zero-length atom is accepted and decodes to the bare sigil.
pub fn decode_atom(buf: &[u8]) -> Result<(String, &[u8]), DecodeError> {
    let (name, tail) = read_u16_prefixed(buf, "ATOM_EXT")?;
    let name = std::str::from_utf8(name)
        .map_err(|e| DecodeError::InvalidValue(format!("atom name is not UTF-8: {}", e)))?;
    let mut atom = String::with_capacity(name.len() + 1);
    atom.push(ATOM_SIGIL);
    atom.push_str(name);
    Ok((atom, tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_atom() {
        let (atom, tail) = decode_atom(&[0, 4, b'a', b't', b'o', b'm', 106]).unwrap();
        assert_eq!(atom, ":atom");
        assert_eq!(tail, &[106]);
    }

    #[test]
    fn test_decode_empty_atom() {
        assert_eq!(decode_atom(&[0, 0]).unwrap().0, ":");
    }

    #[test]
    fn test_decode_atom_truncated() {
        assert_eq!(
            decode_atom(&[0, 5, b'a', b'b']),
            Err(DecodeError::Truncated {
                kind: "ATOM_EXT",
                expected: 5,
                actual: 2
            })
        );
        assert!(decode_atom(&[0]).is_err());
    }

    #[test]
    fn test_decode_atom_invalid_utf8() {
        assert!(matches!(
            decode_atom(&[0, 1, 0xff]),
            Err(DecodeError::InvalidValue(_))
        ));
    }
}
