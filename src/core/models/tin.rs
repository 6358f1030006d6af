//! Tax identification number values
//!
//! A TIN is eleven decimal digits: a ten digit [`Body`] followed by one
//! check digit. The check digit is always derived from the body, so the only
//! way to obtain a [`Tin`] is [`Tin::from_body`].
//!
//! # Examples
//!
//! ```
//! use tingen::core::models::{Body, Tin};
//!
//! let body: Body = "0247629135".parse().unwrap();
//! let tin = Tin::from_body(body);
//! assert_eq!(tin.check_digit(), 8);
//! assert_eq!(tin.to_string(), "02476291358");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::core::services::compute_check_digit;

/// Number of body digits
pub const BODY_LEN: usize = 10;

/// Number of digits in a complete TIN (body plus check digit)
pub const TIN_LEN: usize = BODY_LEN + 1;

/// Errors that can occur when building a body from untrusted input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BodyParseError {
    /// Input did not contain exactly ten digits
    #[error("expected 10 digits, got {0}")]
    WrongLength(usize),

    /// A character was not an ASCII decimal digit
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit {
        /// Zero-based position of the offending character
        position: usize,
        /// The character found there
        found: char,
    },

    /// A numeric digit value was above 9
    #[error("digit value {value} at position {position} is out of range 0..=9")]
    OutOfRange {
        /// Zero-based position of the offending value
        position: usize,
        /// The value found there
        value: u8,
    },
}

/// The ten leading digits of a TIN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Body([u8; BODY_LEN]);

impl Body {
    /// Build a body from digit values, rejecting anything above 9
    pub fn new(digits: [u8; BODY_LEN]) -> Result<Self, BodyParseError> {
        if let Some((position, &value)) = digits.iter().enumerate().find(|(_, d)| **d > 9) {
            return Err(BodyParseError::OutOfRange { position, value });
        }
        Ok(Self(digits))
    }

    /// Wrap digits already known to be in range
    pub(crate) const fn from_digits(digits: [u8; BODY_LEN]) -> Self {
        Self(digits)
    }

    /// Digit values in order
    #[must_use]
    pub const fn digits(&self) -> &[u8; BODY_LEN] {
        &self.0
    }
}

impl FromStr for Body {
    type Err = BodyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != BODY_LEN {
            return Err(BodyParseError::WrongLength(len));
        }

        let mut digits = [0u8; BODY_LEN];
        for (position, (slot, c)) in digits.iter_mut().zip(s.chars()).enumerate() {
            let value = c
                .to_digit(10)
                .ok_or(BodyParseError::InvalidDigit { position, found: c })?;
            *slot = u8::try_from(value).map_err(|_| BodyParseError::InvalidDigit {
                position,
                found: c,
            })?;
        }
        Ok(Self(digits))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

/// A complete tax identification number
///
/// Position 10 is the check digit computed from positions 0 to 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tin {
    digits: [u8; TIN_LEN],
}

impl Tin {
    /// Append the check digit to a body
    #[must_use]
    pub fn from_body(body: Body) -> Self {
        let mut digits = [0u8; TIN_LEN];
        digits[..BODY_LEN].copy_from_slice(body.digits());
        digits[BODY_LEN] = compute_check_digit(body.digits());
        Self { digits }
    }

    /// All eleven digits in order
    #[must_use]
    pub const fn digits(&self) -> &[u8; TIN_LEN] {
        &self.digits
    }

    /// The ten body digits
    #[must_use]
    pub fn body(&self) -> Body {
        let mut body = [0u8; BODY_LEN];
        body.copy_from_slice(&self.digits[..BODY_LEN]);
        Body(body)
    }

    /// The trailing check digit
    #[must_use]
    pub const fn check_digit(&self) -> u8 {
        self.digits[BODY_LEN]
    }
}

impl fmt::Display for Tin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.digits)
    }
}

impl Serialize for Tin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for Body {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8]) -> fmt::Result {
    for d in digits {
        write!(f, "{d}")?;
    }
    Ok(())
}
