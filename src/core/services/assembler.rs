//! Body assembler
//!
//! Fills the ten body positions: repetition positions get the lucky digit,
//! every other position gets a distinct digit drawn from the pool.

use log::trace;
use rand::Rng;

use crate::core::models::{BODY_LEN, Body, Repetition, TinKind};

/// Digits 0 to 9 not yet consumed by the body under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPool {
    available: [bool; 10],
}

impl Default for DigitPool {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitPool {
    /// A pool holding all ten digits
    #[must_use]
    pub const fn new() -> Self {
        Self {
            available: [true; 10],
        }
    }

    /// Whether `digit` can still be drawn
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.available.get(usize::from(digit)).copied().unwrap_or(false)
    }

    /// Mark `digit` as consumed
    pub fn remove(&mut self, digit: u8) {
        if let Some(slot) = self.available.get_mut(usize::from(digit)) {
            *slot = false;
        }
    }

    /// Number of digits still available
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.iter().filter(|a| **a).count()
    }

    /// True when every digit has been consumed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remaining digits in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..10u8).filter(|d| self.contains(*d))
    }

    /// Draw a remaining digit uniformly, without removing it
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<u8> {
        match self.len() {
            0 => None,
            n => self.iter().nth(rng.random_range(0..n)),
        }
    }
}

/// Whether `digit` may occupy non-repetition `position`
///
/// Only a regular TIN restricts anything: it must not start with 0.
#[must_use]
pub const fn is_safe(digit: u8, position: usize, kind: TinKind) -> bool {
    kind.is_test() || !(digit == 0 && position == 0)
}

/// Build the ten body digits for a repetition plan
///
/// The lucky digit is taken out of the pool before any position is filled so
/// it can only appear at its planned positions. Positions are filled in
/// ascending order; a drawn digit that is not [`is_safe`] is put back and the
/// draw repeated.
pub fn assemble_body<R: Rng + ?Sized>(
    rng: &mut R,
    plan: &Repetition,
    lucky_digit: u8,
    kind: TinKind,
) -> Body {
    let mut pool = DigitPool::new();
    pool.remove(lucky_digit);

    let mut digits = [0u8; BODY_LEN];
    for (position, slot) in digits.iter_mut().enumerate() {
        if plan.contains(position) {
            *slot = lucky_digit;
            continue;
        }

        // A regular plan reserves at most 3 slots, so at least 7 digits
        // remain and position 0 always has a nonzero candidate.
        while let Some(digit) = pool.draw(rng) {
            if is_safe(digit, position, kind) {
                *slot = digit;
                pool.remove(digit);
                break;
            }
            trace!("rejected digit {digit} at position {position}");
        }
    }

    Body::from_digits(digits)
}
