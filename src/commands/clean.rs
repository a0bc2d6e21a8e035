//! Clean command implementation.

use crate::cleaner::remove_generated_artifacts;
use crate::cli::CleanArgs;
use crate::config::Config;
use anyhow::Result;
use std::path::Path;

/// Run the clean command.
///
/// Silent on success unless `--dry-run` is given, in which case every
/// directory that would be removed is listed.
pub fn run(root: &Path, config: &Config, args: CleanArgs) -> Result<()> {
    let summary = remove_generated_artifacts(root, config, args.dry_run)?;

    if args.dry_run {
        for artifact in &summary.removed {
            println!(
                "Would remove {} ({})",
                artifact.path.display(),
                artifact.kind
            );
        }
    }

    Ok(())
}
