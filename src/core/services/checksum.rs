//! Check digit calculation
//!
//! ISO 7064 MOD 11,10 running checksum as used by the German federal tax
//! office for the Steuer-IdNr. Pure function, no I/O.

use crate::core::models::BODY_LEN;

const MODULUS_10: u8 = 10;
const MODULUS_11: u8 = 11;

/// Compute the check digit for a ten digit body
///
/// Starting from a product of 10, each digit is folded in as
/// `sum = (digit + product) mod 10` (with 0 mapped to 10) and
/// `product = 2 * sum mod 11`. The check digit is `11 - product`, where a
/// result of 10 becomes 0.
///
/// Digits must be in `0..=9`.
#[must_use]
pub fn compute_check_digit(body: &[u8; BODY_LEN]) -> u8 {
    let product = body.iter().fold(MODULUS_10, |product, &digit| {
        let mut sum = (digit + product) % MODULUS_10;
        if sum == 0 {
            sum = MODULUS_10;
        }
        (2 * sum) % MODULUS_11
    });

    // product is never 0 since 2 * sum is in 2..=20 and 11 is prime
    match MODULUS_11 - product {
        10 => 0,
        check => check,
    }
}
