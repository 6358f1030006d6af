//! Domain models for tingen
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Tin`] - Eleven digits, the last one derived from the first ten
//! - [`Body`] - The ten leading digits
//! - [`TinKind`] - Regular or test TIN
//! - [`Repetition`] - Where the repeated digit goes

mod kind;
mod repetition;
mod tin;

pub use kind::TinKind;
pub use repetition::{Repetition, RepetitionCount, is_consecutive_run};
pub use tin::{BODY_LEN, Body, BodyParseError, TIN_LEN, Tin};
