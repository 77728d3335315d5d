use super::*;
use std::str::FromStr;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::W1001.as_str(), "W1001");
}

#[test]
fn test_all_variants_classified() {
    for code in ErrorCode::ALL {
        assert!(
            code.is_parser_error() ^ code.is_warning(),
            "{code} must be exactly one of error or warning"
        );
        assert!(!code.description().is_empty());
    }
}

#[test]
fn test_from_str_round_trip() {
    for &code in ErrorCode::ALL {
        assert_eq!(ErrorCode::from_str(code.as_str()), Ok(code));
    }
    assert_eq!(ErrorCode::from_str("e1006"), Ok(ErrorCode::E1006));
    assert_eq!(ErrorCode::from_str("E9999"), Err(()));
}
