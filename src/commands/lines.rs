//! Line count command implementation.

use crate::config::Config;
use crate::lines::count_lines;
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

/// Print the per-file line counts and their total.
pub fn run(root: &Path, config: &Config) -> Result<()> {
    let report = count_lines(root, config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.render(config.lines.width).as_bytes())?;
    stdout.flush()?;

    Ok(())
}
