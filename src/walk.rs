//! Shared directory walking for the cleaner and the line counter.

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Build a walker over `root` that never follows symlinks and yields
/// entries sorted by file name within each directory.
pub fn walker(root: &Path) -> WalkDir {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
}

/// True if the entry is a directory whose name is in `exclude`.
///
/// The root itself is never excluded.
pub fn is_excluded(entry: &DirEntry, exclude: &[String]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    exclude.iter().any(|pattern| name == pattern.as_str())
}

/// Path of `path` relative to `root`, falling back to `path` unchanged.
pub fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
