//! Discovery of generated artifacts in a working tree.

use crate::cleaner::artifact::{ArtifactKind, CacheArtifact};
use crate::config::{Config, FailurePolicy};
use crate::error::{MaintError, Result};
use crate::walk;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Artifacts found in a tree, plus the paths that could not be searched.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub artifacts: Vec<CacheArtifact>,
    pub failures: Vec<(PathBuf, String)>,
}

/// Locates cache directories anywhere in a tree and the metadata
/// directory at its root.
#[derive(Debug, Clone)]
pub struct ArtifactFinder {
    cache_dir_name: String,
    metadata_dir_name: String,
    exclude: Vec<String>,
    on_error: FailurePolicy,
}

impl ArtifactFinder {
    pub fn new(
        cache_dir_name: impl Into<String>,
        metadata_dir_name: impl Into<String>,
        exclude: Vec<String>,
    ) -> Self {
        Self {
            cache_dir_name: cache_dir_name.into(),
            metadata_dir_name: metadata_dir_name.into(),
            exclude,
            on_error: FailurePolicy::Continue,
        }
    }

    /// Set what happens when part of the tree cannot be read.
    pub fn with_failure_policy(mut self, on_error: FailurePolicy) -> Self {
        self.on_error = on_error;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.cleaner.cache_dir_name.clone(),
            config.project.metadata_dir_name(),
            config.project.exclude.clone(),
        )
        .with_failure_policy(config.cleaner.on_error)
    }

    /// Find all artifacts under `root`.
    ///
    /// Cache directories are returned children before parents, so a cache
    /// directory nested in another one is listed ahead of it. The metadata
    /// directory, if present, comes last.
    ///
    /// With [`FailurePolicy::Continue`] unreadable parts of the tree are
    /// recorded in [`Discovery::failures`] and the walk goes on; with
    /// [`FailurePolicy::Abort`] the first one is returned as an error.
    pub fn find(&self, root: &Path) -> Result<Discovery> {
        let mut artifacts = Vec::new();
        let mut failures = Vec::new();

        let walker = walk::walker(root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| !walk::is_excluded(e, &self.exclude));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if self.on_error == FailurePolicy::Continue => {
                    let path = err.path().unwrap_or(root).to_path_buf();
                    tracing::warn!("Cannot search {}: {}", path.display(), err);
                    failures.push((path, err.to_string()));
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            // Symlinks are reported as symlinks, never as directories.
            if entry.file_type().is_dir() && entry.file_name() == self.cache_dir_name.as_str() {
                artifacts.push(CacheArtifact::new(entry.path(), ArtifactKind::BytecodeCache));
            }
        }

        // Pre-order reversed puts every descendant ahead of its ancestor.
        artifacts.reverse();

        let metadata_dir = root.join(&self.metadata_dir_name);
        match fs::symlink_metadata(&metadata_dir) {
            Ok(meta) if meta.is_dir() => {
                artifacts.push(CacheArtifact::new(metadata_dir, ArtifactKind::PackagingMetadata));
            }
            Ok(_) => {
                tracing::debug!(path = %metadata_dir.display(), "Not a directory, leaving it");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) if self.on_error == FailurePolicy::Continue => {
                failures.push((metadata_dir, e.to_string()));
            }
            Err(e) => return Err(MaintError::fs(metadata_dir, e)),
        }

        Ok(Discovery {
            artifacts,
            failures,
        })
    }
}
