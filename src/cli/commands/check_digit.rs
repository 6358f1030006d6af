//! Check digit command - compute the eleventh digit for a body

use anyhow::Context;
use tingen::core::models::Body;
use tingen::output::{CheckDigitResult, OutputMode};

/// Compute and print the check digit for `body`
pub fn check_digit(body: &str, mode: OutputMode) -> anyhow::Result<()> {
    let body: Body = body
        .parse()
        .with_context(|| format!("invalid body {body:?}"))?;
    CheckDigitResult::new(body).render(mode);
    Ok(())
}
