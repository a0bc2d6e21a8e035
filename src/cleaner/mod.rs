//! Removal of generated cache and packaging-metadata directories.
//!
//! This module provides:
//! - Discovery of bytecode cache directories and the egg-info directory
//! - Deletion of the discovered artifacts, deepest first

mod artifact;
mod executor;
mod finder;

pub use artifact::{ArtifactKind, CacheArtifact};
pub use executor::{CleanExecutor, CleanOptions, CleanSummary};
pub use finder::{ArtifactFinder, Discovery};

use crate::config::Config;
use crate::error::{MaintError, Result};
use std::path::Path;

/// Find and delete every generated artifact under `root`.
///
/// A tree with nothing to remove is not an error. Under the `continue`
/// policy, parts of the tree that could not be searched are reported
/// together with failed deletions, after every found artifact was tried.
pub fn remove_generated_artifacts(
    root: &Path,
    config: &Config,
    dry_run: bool,
) -> Result<CleanSummary> {
    let finder = ArtifactFinder::from_config(config);
    let Discovery {
        artifacts,
        mut failures,
    } = finder.find(root)?;

    tracing::debug!(count = artifacts.len(), root = %root.display(), "Found artifacts");

    let executor = CleanExecutor::new(CleanOptions {
        dry_run,
        on_error: config.cleaner.on_error,
    });

    match executor.clean(&artifacts) {
        Ok(summary) if failures.is_empty() => Ok(summary),
        Ok(_) => Err(MaintError::PartialClean(failures)),
        Err(MaintError::PartialClean(more)) => {
            failures.extend(more);
            Err(MaintError::PartialClean(failures))
        }
        Err(e) => Err(e),
    }
}
