//! Executor for deleting discovered artifacts.

use crate::cleaner::artifact::CacheArtifact;
use crate::config::FailurePolicy;
use crate::error::{MaintError, Result};
use humansize::{format_size, BINARY};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Options for the clean executor.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// If true, don't actually delete anything.
    pub dry_run: bool,
    /// Whether a failed deletion stops the run.
    pub on_error: FailurePolicy,
}

/// What a clean run did.
#[derive(Debug, Clone, Default)]
pub struct CleanSummary {
    /// Artifacts removed, or that would be removed in a dry run.
    pub removed: Vec<CacheArtifact>,
    /// Total size of the removed files in bytes.
    pub freed_bytes: u64,
}

impl CleanSummary {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Deletes artifacts in the order they are given.
pub struct CleanExecutor {
    options: CleanOptions,
}

impl CleanExecutor {
    /// Create a new executor with the given options.
    pub fn new(options: CleanOptions) -> Self {
        Self { options }
    }

    /// Delete every artifact.
    ///
    /// Artifacts that no longer exist are skipped. With
    /// [`FailurePolicy::Continue`] every deletion is attempted and failures
    /// are reported together at the end; with [`FailurePolicy::Abort`] the
    /// first failure is returned immediately.
    pub fn clean(&self, artifacts: &[CacheArtifact]) -> Result<CleanSummary> {
        let mut summary = CleanSummary::default();
        let mut failures = Vec::new();

        for artifact in artifacts {
            match self.remove(&artifact.path) {
                Ok(Some(freed)) => {
                    tracing::debug!(
                        path = %artifact.path.display(),
                        kind = %artifact.kind,
                        "Removed"
                    );
                    summary.freed_bytes += freed;
                    summary.removed.push(artifact.clone());
                }
                Ok(None) => {
                    tracing::trace!(path = %artifact.path.display(), "Already gone, skipping");
                }
                Err(e) => {
                    tracing::warn!("Failed to remove {}: {}", artifact.path.display(), e);
                    match self.options.on_error {
                        FailurePolicy::Abort => return Err(MaintError::fs(&artifact.path, e)),
                        FailurePolicy::Continue => {
                            failures.push((artifact.path.clone(), e.to_string()));
                        }
                    }
                }
            }
        }

        tracing::info!(
            removed = summary.removed.len(),
            freed = %format_size(summary.freed_bytes, BINARY),
            dry_run = self.options.dry_run,
            "Clean finished"
        );

        if !failures.is_empty() {
            return Err(MaintError::PartialClean(failures));
        }

        Ok(summary)
    }

    /// Remove one directory tree, returning its size, or `None` if it
    /// does not exist.
    fn remove(&self, path: &Path) -> io::Result<Option<u64>> {
        match fs::symlink_metadata(path) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        }

        let size = Self::dir_size(path);

        if self.options.dry_run {
            return Ok(Some(size));
        }

        match fs::remove_dir_all(path) {
            Ok(()) => Ok(Some(size)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn dir_size(path: &Path) -> u64 {
        WalkDir::new(path)
            .into_iter()
            .flatten()
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| e.metadata().ok())
            .map(|m| m.len())
            .sum()
    }
}
