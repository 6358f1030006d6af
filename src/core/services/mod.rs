//! Generation services
//!
//! Pure logic operating on domain models. Randomness is always passed in by
//! the caller, except for [`generate`] which seeds its own generator.
//!
//! - [`planner`] - How often the lucky digit repeats and where
//! - [`lucky`] - Which digit repeats
//! - [`assembler`] - Fill the ten body positions
//! - [`checksum`] - Derive the eleventh digit
//! - [`generator`] - Run the pipeline end to end

pub mod assembler;
pub mod checksum;
pub mod generator;
pub mod lucky;
pub mod planner;

pub use assembler::{DigitPool, assemble_body, is_safe};
pub use checksum::compute_check_digit;
pub use generator::{GenerateError, TinGenerator, generate, generate_with};
pub use lucky::choose_lucky_digit;
pub use planner::{choose_positions, choose_repetition_count};
