//! tingen - Generator for German tax identification numbers
//!
//! This library builds syntactically valid Steuer-IdNr values: ten body
//! digits in which exactly one digit repeats two or three times, followed by
//! an ISO 7064 MOD 11,10 check digit.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod paths;

pub use crate::core::models::{Body, Tin, TinKind};
pub use crate::core::services::{GenerateError, compute_check_digit, generate};
