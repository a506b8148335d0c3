//! Integration tests for entities_utilities crate
//!
//! These tests verify big number conversions end-to-end.

use entities_utilities::*;

#[test]
fn test_big_number_magnitude_roundtrip() {
    let values = [
        "0",
        "1",
        "-1",
        "2147483648",
        "-2147483649",
        "18446744073709551616",
        "-123456789012345678901234567890123456789",
    ];

    for text in values {
        let original: BigNumber = text.parse().unwrap();
        let (negative, magnitude) = original.to_sign_and_magnitude();
        let rebuilt = BigNumber::from_sign_and_magnitude(negative, &magnitude);
        assert_eq!(rebuilt, original, "magnitude roundtrip failed for {}", text);
        assert_eq!(magnitude.len(), original.magnitude_len());
    }
}

#[test]
fn test_big_number_huge_power() {
    // 4294967295 ^ 1000 needs far more than 255 magnitude bytes
    let base = BigNumber::from_u64(4294967295);
    let huge = base.pow(1000);
    assert!(huge.magnitude_len() > 255);
    assert!(huge.to_i64().is_none());
}

#[test]
fn test_big_number_primitive_conversions() {
    assert_eq!(BigNumber::from(255u8).to_u8(), Some(255));
    assert_eq!(BigNumber::from(256u16).to_u8(), None);
    assert_eq!(BigNumber::from(i32::MIN).to_i32(), Some(i32::MIN));
    assert_eq!(BigNumber::from(i32::MAX as i64 + 1).to_i32(), None);
    assert_eq!(BigNumber::from(u128::MAX).to_string(), u128::MAX.to_string());
}

#[test]
fn test_parse_error_reports_input() {
    let err = "not-a-number".parse::<BigNumber>().unwrap_err();
    assert_eq!(err, ParseBigNumberError("not-a-number".to_string()));
    assert!(err.to_string().contains("not-a-number"));
}
