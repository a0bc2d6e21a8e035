//! Style checking of the package sources.
//!
//! The actual checking is delegated to a [`Checker`]. The default one runs an
//! external tool whose output goes straight to our own streams;
//! [`BuiltinChecker`] performs a few basic checks in-process and hands its
//! findings back for the caller to print.

mod builtin;
mod external;

pub use builtin::BuiltinChecker;
pub use external::ExternalChecker;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{CheckerBackend, Config};
use crate::error::{MaintError, Result, ToolError};
use crate::walk;

/// Result of running a checker: its exit status and any output it left for
/// the caller to print. Checkers that write to the inherited streams leave
/// both buffers empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Exit code; 0 means no findings.
    pub code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CheckOutcome {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Something that can check a set of source files.
pub trait Checker {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Check `files` and report the outcome.
    ///
    /// Findings are not an error: they are reported through a non-zero
    /// [`CheckOutcome::code`]. Errors mean the check could not run at all.
    fn check(&self, files: &[PathBuf]) -> Result<CheckOutcome>;
}

/// Build the checker selected by the configuration, running in `root`.
pub fn checker_for(config: &Config, root: &Path) -> Box<dyn Checker> {
    match config.checker.backend {
        CheckerBackend::External => Box::new(ExternalChecker::new(
            config.checker.program.clone(),
            config.checker.args.clone(),
            root,
        )),
        CheckerBackend::Builtin => {
            Box::new(BuiltinChecker::new(config.checker.max_line_length, root))
        }
    }
}

/// Files with `extension` directly inside `root/package`, sorted, as paths
/// relative to `root`.
pub fn source_files(root: &Path, package: &str, extension: &str) -> Result<Vec<PathBuf>> {
    let package_dir = root.join(package);
    fs::metadata(&package_dir).map_err(|e| MaintError::fs(&package_dir, e))?;

    let mut files = Vec::new();
    for entry in walk::walker(&package_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let is_source = entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == extension);
        if is_source {
            files.push(walk::relative_to(entry.path(), root).to_path_buf());
        }
    }

    if files.is_empty() {
        return Err(ToolError::NoSources(package_dir).into());
    }
    Ok(files)
}

/// Run the configured checker over the package sources under `root`.
pub fn check_style(root: &Path, config: &Config) -> Result<CheckOutcome> {
    let files = source_files(
        root,
        &config.project.package,
        &config.project.source_extension,
    )?;
    let checker = checker_for(config, root);

    tracing::info!(checker = checker.name(), files = files.len(), "Checking style");
    let outcome = checker.check(&files)?;
    tracing::debug!(code = outcome.code, "Checker finished");

    Ok(outcome)
}
