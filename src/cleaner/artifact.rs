//! Types describing what the cleaner removes.

use std::fmt;
use std::path::PathBuf;

/// Kind of generated directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Interpreter bytecode cache (`__pycache__`), found anywhere in the tree.
    BytecodeCache,
    /// Packaging metadata (`<package>.egg-info`), only at the repository root.
    PackagingMetadata,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::BytecodeCache => f.write_str("bytecode cache"),
            ArtifactKind::PackagingMetadata => f.write_str("packaging metadata"),
        }
    }
}

/// A directory subtree eligible for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheArtifact {
    pub path: PathBuf,
    pub kind: ArtifactKind,
}

impl CacheArtifact {
    pub fn new(path: impl Into<PathBuf>, kind: ArtifactKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}
