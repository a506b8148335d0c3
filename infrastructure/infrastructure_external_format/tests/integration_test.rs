//! Integration tests for infrastructure_external_format crate
//!
//! These tests run full encode and decode cycles through the magic byte and
//! the compression envelope.

use entities_data_handling::Term;
use entities_utilities::BigNumber;
use infrastructure_ei_primitives::{DecodeError, FloatFormat};
use infrastructure_external_format::*;
use infrastructure_utilities::CompressionLevel;

fn sample() -> Term {
    Term::Tuple(vec![
        Term::atom("reply"),
        Term::from(1337),
        Term::List(vec![Term::from("chunk"); 40]),
        Term::Integer(BigNumber::from(2).pow(100)),
        Term::from(-0.25),
    ])
}

#[test]
fn test_roundtrip_every_option_combination() {
    let term = sample();
    for compression in [None, Some(CompressionLevel::NONE), Some(CompressionLevel::BEST_COMPRESSION)] {
        for float_format in [FloatFormat::New, FloatFormat::Old] {
            let options = EncodeOptions {
                compression,
                float_format,
            };
            let bytes = erts_encode_ext(&term, &options).unwrap();
            assert_eq!(erts_decode_ext_exact(&bytes).unwrap(), term);
        }
    }
}

#[test]
fn test_compression_shrinks_repetitive_terms() {
    let term = sample();
    let plain = erts_encode_ext(&term, &EncodeOptions::new()).unwrap();
    let compressed = erts_encode_ext(&term, &EncodeOptions::new().compressed(CompressionLevel::DEFAULT)).unwrap();
    assert_eq!(plain.len(), erts_encode_ext_size(&term, &EncodeOptions::new()));
    assert!(compressed.len() < plain.len());
    assert_eq!(compressed[1], 80);
}

#[test]
fn test_truncated_envelope_never_decodes() {
    let bytes = erts_encode_ext(&sample(), &EncodeOptions::new().compressed(CompressionLevel::DEFAULT)).unwrap();
    for cut in 1..bytes.len() {
        match erts_decode_ext_exact(&bytes[..cut]) {
            Err(DecodeError::Truncated { .. }) | Err(DecodeError::DecompressionFailed(_)) => {}
            other => panic!("cut at {} gave {:?}", cut, other),
        }
    }
}

#[test]
fn test_truncated_plain_never_decodes() {
    let bytes = erts_encode_ext(&sample(), &EncodeOptions::new()).unwrap();
    for cut in 1..bytes.len() {
        assert!(
            matches!(erts_decode_ext_exact(&bytes[..cut]), Err(DecodeError::Truncated { .. })),
            "cut at {}",
            cut
        );
    }
}

#[test]
fn test_stream_of_terms() {
    let mut stream = Vec::new();
    stream.extend(erts_encode_ext(&Term::atom("first"), &EncodeOptions::new()).unwrap());
    stream.extend(erts_encode_ext(&sample(), &EncodeOptions::new().compressed(CompressionLevel::DEFAULT)).unwrap());
    stream.extend(erts_encode_ext(&Term::nil(), &EncodeOptions::new()).unwrap());

    let (first, rest) = erts_decode_ext(&stream).unwrap();
    let (second, rest) = erts_decode_ext(rest).unwrap();
    let (third, rest) = erts_decode_ext(rest).unwrap();
    assert_eq!(first, Term::atom("first"));
    assert_eq!(second, sample());
    assert_eq!(third, Term::nil());
    assert!(rest.is_empty());
}
