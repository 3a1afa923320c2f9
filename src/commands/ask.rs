//! `newyear ask` handler

use std::io;

use anyhow::{Context, Result};

use newyear::fireworks::Interrupt;
use newyear::Config;

/// Ask the configured question once and echo the answer.
///
/// Ctrl-C at the prompt exits with status 130.
pub fn handle() -> Result<()> {
    let config = Config::load()?;
    Interrupt::install().context("Failed to install Ctrl-C handler")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let answer = config
        .ask
        .run(&mut stdin.lock(), &mut stdout.lock())
        .context("Failed to ask question")?;

    tracing::debug!(len = answer.len(), "answer echoed");
    Ok(())
}
