//! Tests for the check digit calculation
//!
//! Reference bodies come from the ELSTER interface description and the EU
//! TIN algorithm description.

use tingen::core::models::{Body, Tin};
use tingen::core::services::compute_check_digit;

#[test]
fn reference_bodies() {
    let cases: [([u8; 10], u8); 4] = [
        ([0, 2, 4, 7, 6, 2, 9, 1, 3, 5], 8),
        ([2, 6, 9, 5, 4, 3, 7, 1, 8, 2], 7),
        ([8, 6, 0, 9, 5, 7, 4, 2, 7, 1], 9),
        ([6, 5, 9, 2, 9, 9, 7, 0, 4, 8], 9),
    ];
    for (body, expected) in cases {
        assert_eq!(compute_check_digit(&body), expected, "body {body:?}");
    }
}

#[test]
fn eleven_minus_one_is_emitted_as_zero() {
    // product ends at 1, so 11 - product == 10
    let body: Body = "6895109732".parse().unwrap();
    let tin = Tin::from_body(body);
    assert_eq!(tin.check_digit(), 0);
    assert_eq!(tin.to_string(), "68951097320");
}

#[test]
fn check_digit_is_always_a_single_digit() {
    let mut body = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];
    for _ in 0..10 {
        body.rotate_left(1);
        assert!(compute_check_digit(&body) <= 9);
    }
}

#[test]
fn pure_function() {
    let body = [6, 5, 9, 2, 9, 9, 7, 0, 4, 8];
    let first = compute_check_digit(&body);
    let second = compute_check_digit(&body);
    assert_eq!(first, second);
}

#[test]
fn tin_stores_computed_check_digit() {
    let body: Body = "1234567891".parse().unwrap();
    let tin = Tin::from_body(body);
    assert_eq!(tin.check_digit(), compute_check_digit(body.digits()));
    assert_eq!(tin.check_digit(), 1);
}
