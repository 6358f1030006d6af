//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::config::GlobalConfig;
use crate::core::models::{Body, Tin, TinKind};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a generate operation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerateResult {
    /// The full eleven digit TIN
    pub tin: Tin,
    /// The first ten digits
    pub body: Body,
    /// The trailing check digit
    pub check_digit: u8,
    /// Whether this is a test TIN
    pub test: bool,
}

impl GenerateResult {
    /// Describe a freshly generated TIN
    #[must_use]
    pub fn new(tin: Tin, kind: TinKind) -> Self {
        Self {
            tin,
            body: tin.body(),
            check_digit: tin.check_digit(),
            test: kind.is_test(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, verbose: bool) {
        match mode {
            OutputMode::Human => {
                println!("{}", self.tin);
                if verbose {
                    println!("({} TIN)", TinKind::from(self.test));
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// Result of a check digit computation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CheckDigitResult {
    /// The ten digit input
    pub body: Body,
    /// The computed check digit
    pub check_digit: u8,
    /// Body followed by its check digit
    pub tin: Tin,
}

impl CheckDigitResult {
    /// Compute the check digit for `body`
    #[must_use]
    pub fn new(body: Body) -> Self {
        let tin = Tin::from_body(body);
        Self {
            body,
            check_digit: tin.check_digit(),
            tin,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Check digit: {}", self.check_digit);
                println!("TIN: {}", self.tin);
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// Effective configuration and where it came from
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResult {
    /// Config file consulted
    pub path: String,
    /// Whether that file exists
    pub exists: bool,
    /// Effective values
    pub config: GlobalConfig,
}

impl ConfigResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let suffix = if self.exists { "" } else { " (not found, using defaults)" };
                println!("Config: {}{suffix}", self.path);
                println!("generate.test = {}", self.config.generate.test);
            },
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
