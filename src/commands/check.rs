//! Style check command implementation.

use crate::checker::check_style;
use crate::config::Config;
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

/// Run the style checker and print any findings it handed back.
///
/// Returns the checker's exit code, which the caller uses as the process
/// exit code.
pub fn run(root: &Path, config: &Config) -> Result<i32> {
    let outcome = check_style(root, config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&outcome.stdout)?;
    stdout.flush()?;

    let mut stderr = io::stderr().lock();
    stderr.write_all(&outcome.stderr)?;
    stderr.flush()?;

    Ok(outcome.code)
}
