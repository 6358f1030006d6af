//! TIN generation entry points
//!
//! Runs the full pipeline: repetition planner, lucky digit chooser, body
//! assembler and checksum. Every call owns its pool and index sets; nothing is
//! shared between calls.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tingen::core::models::TinKind;
//! use tingen::core::services::generate_with;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let tin = generate_with(&mut rng, TinKind::Regular);
//! assert_eq!(tin.to_string().len(), 11);
//! assert_ne!(tin.digits()[0], 0);
//! ```

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use super::assembler::assemble_body;
use super::lucky::choose_lucky_digit;
use super::planner::{choose_positions, choose_repetition_count};
use crate::core::models::{Tin, TinKind};

/// Errors that abort generation
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The operating system could not provide random bits
    #[error("entropy source unavailable: {0}")]
    Entropy(String),
}

/// Generate a TIN using a fresh OS-seeded random number generator
///
/// Fails only if the operating system cannot provide a seed; no partial TIN
/// is ever returned.
pub fn generate(is_test: bool) -> Result<Tin, GenerateError> {
    let mut rng = StdRng::try_from_os_rng().map_err(|e| GenerateError::Entropy(e.to_string()))?;
    Ok(generate_with(&mut rng, TinKind::from(is_test)))
}

/// Generate a TIN drawing from the supplied random number generator
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, kind: TinKind) -> Tin {
    let count = choose_repetition_count(rng);
    let plan = choose_positions(rng, count);
    let lucky_digit = choose_lucky_digit(rng, &plan, kind);
    debug!(
        "{kind} TIN: lucky digit {lucky_digit} at positions {:?}",
        plan.positions()
    );

    let body = assemble_body(rng, &plan, lucky_digit, kind);
    Tin::from_body(body)
}

/// Generator bound to one random number generator
///
/// Useful when a caller wants reproducible output from a seeded generator or
/// wants to avoid reseeding from the OS on every request.
#[derive(Debug)]
pub struct TinGenerator<R> {
    rng: R,
}

impl TinGenerator<StdRng> {
    /// Seed from the operating system
    pub fn from_os_rng() -> Result<Self, GenerateError> {
        StdRng::try_from_os_rng()
            .map(Self::new)
            .map_err(|e| GenerateError::Entropy(e.to_string()))
    }

    /// Deterministic generator for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TinGenerator<R> {
    /// Wrap an existing random number generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produce the next TIN
    pub fn next_tin(&mut self, kind: TinKind) -> Tin {
        generate_with(&mut self.rng, kind)
    }
}
