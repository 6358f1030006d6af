//! Generate command - produce one TIN

use std::path::Path;

use anyhow::Context;
use log::debug;
use tingen::core::models::TinKind;
use tingen::core::services::generate as generate_tin;
use tingen::output::{GenerateResult, OutputMode};

/// Generate a TIN and print it
pub fn generate(
    test: bool,
    regular: bool,
    config_path: Option<&Path>,
    verbose: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let requested = match (test, regular) {
        (true, _) => Some(TinKind::Test),
        (false, true) => Some(TinKind::Regular),
        (false, false) => None,
    };
    let kind = config.kind(requested);
    debug!("generating {kind} TIN");

    let tin = generate_tin(kind.is_test()).context("failed to generate TIN")?;
    GenerateResult::new(tin, kind).render(mode, verbose);
    Ok(())
}
