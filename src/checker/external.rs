use std::io;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::checker::{CheckOutcome, Checker};
use crate::error::{Result, ToolError};

/// Runs an external style checking program, `flake8` by default.
///
/// The program inherits this process's stdin, stdout and stderr, so its
/// diagnostics reach the invoker as it writes them, in its own order and
/// with its own terminal detection. The returned outcome therefore carries
/// only the exit code.
pub struct ExternalChecker {
    program: String,
    args: Vec<String>,
    workdir: PathBuf,
}

impl ExternalChecker {
    pub fn new(program: impl Into<String>, args: Vec<String>, workdir: &Path) -> Self {
        Self {
            program: program.into(),
            args,
            workdir: workdir.to_path_buf(),
        }
    }
}

impl Checker for ExternalChecker {
    fn name(&self) -> &str {
        &self.program
    }

    fn check(&self, files: &[PathBuf]) -> Result<CheckOutcome> {
        tracing::debug!(program = %self.program, args = ?self.args, "Spawning checker");

        let status = Command::new(&self.program)
            .args(&self.args)
            .args(files)
            .current_dir(&self.workdir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ToolError::NotFound(self.program.clone()),
                _ => ToolError::Spawn {
                    program: self.program.clone(),
                    source: e,
                },
            })?;

        Ok(CheckOutcome {
            code: exit_code(status),
            ..Default::default()
        })
    }
}

/// Exit code of a finished process, or `128 + signal` if it was killed.
fn exit_code(status: ExitStatus) -> i32 {
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}
