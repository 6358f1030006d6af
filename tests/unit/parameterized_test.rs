//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use tingen::core::models::{Body, BodyParseError, Repetition, TinKind, is_consecutive_run};
use tingen::core::services::{compute_check_digit, is_safe};
use test_case::test_case;

// =============================================================================
// Check Digit Tests
// =============================================================================

#[test_case("0247629135", 8 ; "elster example one")]
#[test_case("2695437182", 7 ; "elster example two")]
#[test_case("8609574271", 9 ; "elster example three")]
#[test_case("6592997048", 9 ; "elster example four")]
#[test_case("6895109732", 0 ; "raw ten wraps to zero")]
fn test_check_digit(body: &str, expected: u8) {
    let body: Body = body.parse().unwrap();
    assert_eq!(compute_check_digit(body.digits()), expected);
}

// =============================================================================
// Body Parsing Tests
// =============================================================================

#[test_case("0247629135", true ; "ten digits")]
#[test_case(" 0247629135\n", true ; "surrounding whitespace")]
#[test_case("024762913", false ; "nine digits")]
#[test_case("02476291358", false ; "eleven digits")]
#[test_case("02476-9135", false ; "dash")]
#[test_case("", false ; "empty")]
fn test_body_parse(input: &str, ok: bool) {
    assert_eq!(input.parse::<Body>().is_ok(), ok);
}

#[test_case("123", BodyParseError::WrongLength(3) ; "too short")]
#[test_case("12345678a0", BodyParseError::InvalidDigit { position: 8, found: 'a' } ; "letter")]
fn test_body_parse_error(input: &str, expected: BodyParseError) {
    assert_eq!(input.parse::<Body>().unwrap_err(), expected);
}

// =============================================================================
// Mode Tests
// =============================================================================

#[test_case("regular", Some(TinKind::Regular) ; "regular")]
#[test_case("TEST", Some(TinKind::Test) ; "case insensitive")]
#[test_case("prod", None ; "unknown")]
fn test_kind_parse(input: &str, expected: Option<TinKind>) {
    assert_eq!(input.parse::<TinKind>().ok(), expected);
}

#[test_case(false, TinKind::Regular ; "false is regular")]
#[test_case(true, TinKind::Test ; "true is test")]
fn test_kind_from_bool(is_test: bool, expected: TinKind) {
    assert_eq!(TinKind::from(is_test), expected);
    assert_eq!(expected.is_test(), is_test);
}

// =============================================================================
// Repetition Tests
// =============================================================================

#[test_case(0, 1, 2, true ; "ascending run")]
#[test_case(8, 9, 7, true ; "shuffled run")]
#[test_case(0, 1, 3, false ; "gap at end")]
#[test_case(4, 2, 3, true ; "middle drawn last")]
#[test_case(0, 5, 9, false ; "spread")]
fn test_consecutive_run(a: usize, b: usize, c: usize, expected: bool) {
    assert_eq!(is_consecutive_run(a, b, c), expected);
}

#[test_case(Repetition::Twice([3, 8]), 2 ; "twice")]
#[test_case(Repetition::Thrice([0, 2, 9]), 3 ; "thrice")]
fn test_repetition_positions(plan: Repetition, expected: usize) {
    assert_eq!(plan.positions().len(), expected);
    assert_eq!(plan.count().occurrences(), expected);
}

// =============================================================================
// Safety Rule Tests
// =============================================================================

#[test_case(0, 0, TinKind::Regular, false ; "regular leading zero rejected")]
#[test_case(0, 4, TinKind::Regular, true ; "regular inner zero accepted")]
#[test_case(7, 0, TinKind::Regular, true ; "regular leading nonzero accepted")]
#[test_case(0, 0, TinKind::Test, true ; "test leading zero accepted")]
fn test_is_safe(digit: u8, position: usize, kind: TinKind, expected: bool) {
    assert_eq!(is_safe(digit, position, kind), expected);
}
