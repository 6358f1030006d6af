//! Core generation logic for tingen
//!
//! This module contains the TIN algorithm with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Tin, Body, TinKind, Repetition)
//! - `services/` - Planner, lucky digit chooser, assembler, checksum, generator

pub mod models;
pub mod services;
