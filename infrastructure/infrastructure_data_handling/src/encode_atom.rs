//! Encode Atom Module
//!
//! Provides functionality to encode atoms to EI format.
//! Based on lib/erl_interface/src/encode/encode_atom.c

use entities_data_handling::atom::MAX_ATOM_CHARACTERS;
use infrastructure_ei_primitives::constants::ERL_ATOM_EXT;
use infrastructure_ei_primitives::EncodeError;

/// Encode an atom as `ATOM_EXT`
///
/// # Arguments
/// * `buf` - Buffer to write encoded data to
/// * `name` - Atom name without the sigil, as UTF-8 bytes
///
/// # Returns
/// * `Ok(())` - The atom was appended to `buf`
/// * `Err(EncodeError::InvalidValue)` - The name is empty or not UTF-8
/// * `Err(EncodeError::LengthOverflow)` - The name is longer than 255 bytes
pub fn encode_atom(buf: &mut Vec<u8>, name: &[u8]) -> Result<(), EncodeError> {
    if name.is_empty() {
        return Err(EncodeError::InvalidValue("atom name is empty".to_string()));
    }
    std::str::from_utf8(name)
        .map_err(|e| EncodeError::InvalidValue(format!("atom name is not UTF-8: {}", e)))?;
    if name.len() > MAX_ATOM_CHARACTERS {
        return Err(EncodeError::LengthOverflow {
            kind: "ATOM_EXT",
            length: name.len(),
        });
    }
    buf.push(ERL_ATOM_EXT);
    buf.extend_from_slice(&(name.len() as u16).to_be_bytes());
    buf.extend_from_slice(name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_atom() {
        let mut buf = Vec::new();
        encode_atom(&mut buf, b"atom").unwrap();
        assert_eq!(buf, vec![100, 0, 4, b'a', b't', b'o', b'm']);
    }

    #[test]
    fn test_encode_atom_max_length() {
        let mut buf = Vec::new();
        encode_atom(&mut buf, &[b'a'; 255]).unwrap();
        assert_eq!(buf.len(), 3 + 255);
        assert_eq!(&buf[1..3], &[0, 255]);
    }

    #[test]
    fn test_encode_atom_too_long() {
        let mut buf = Vec::new();
        assert_eq!(
            encode_atom(&mut buf, &[b'a'; 256]),
            Err(EncodeError::LengthOverflow {
                kind: "ATOM_EXT",
                length: 256
            })
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn test_encode_atom_empty() {
        let mut buf = Vec::new();
        assert!(matches!(
            encode_atom(&mut buf, b""),
            Err(EncodeError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_encode_atom_invalid_utf8() {
        let mut buf = Vec::new();
        assert!(matches!(
            encode_atom(&mut buf, &[0xff, 0xfe]),
            Err(EncodeError::InvalidValue(_))
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_encode_atom_counts_bytes_not_chars() {
        let mut buf = Vec::new();
        encode_atom(&mut buf, "тест".as_bytes()).unwrap();
        assert_eq!(&buf[1..3], &[0, 8]);
    }
}
