use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::{CheckOutcome, Checker};
use crate::error::{MaintError, Result};

/// In-process checker covering a handful of whitespace and layout rules:
/// W191, W291, W292, W293 and E501.
///
/// Findings are printed as `path:line:col: CODE message`, one per line.
pub struct BuiltinChecker {
    max_line_length: usize,
    root: PathBuf,
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Finding {
    line: usize,
    column: usize,
    code: &'static str,
    message: String,
}

impl BuiltinChecker {
    pub fn new(max_line_length: usize, root: &Path) -> Self {
        Self {
            max_line_length,
            root: root.to_path_buf(),
        }
    }

    fn check_source(&self, source: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (idx, line) in source.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.strip_suffix('\r').unwrap_or(line);

            let trimmed = line.trim_end();
            if trimmed.is_empty() {
                // A blank line has no indentation, only stray whitespace
                if !line.is_empty() {
                    findings.push(Finding {
                        line: line_no,
                        column: 1,
                        code: "W293",
                        message: "whitespace on blank line".to_string(),
                    });
                }
            } else {
                let indent: String = line.chars().take_while(|c| c.is_whitespace()).collect();
                if indent.contains('\t') {
                    findings.push(Finding {
                        line: line_no,
                        column: 1,
                        code: "W191",
                        message: "indentation contains tabs".to_string(),
                    });
                }

                if trimmed.len() != line.len() {
                    findings.push(Finding {
                        line: line_no,
                        column: trimmed.chars().count() + 1,
                        code: "W291",
                        message: "trailing whitespace".to_string(),
                    });
                }
            }

            let length = line.chars().count();
            if length > self.max_line_length {
                findings.push(Finding {
                    line: line_no,
                    column: self.max_line_length + 1,
                    code: "E501",
                    message: format!(
                        "line too long ({} > {} characters)",
                        length, self.max_line_length
                    ),
                });
            }
        }

        if !source.is_empty() && !source.ends_with('\n') {
            let last = source.lines().last().unwrap_or("");
            findings.push(Finding {
                line: source.lines().count(),
                column: last.chars().count() + 1,
                code: "W292",
                message: "no newline at end of file".to_string(),
            });
        }

        findings
    }
}

impl Checker for BuiltinChecker {
    fn name(&self) -> &str {
        "builtin"
    }

    fn check(&self, files: &[PathBuf]) -> Result<CheckOutcome> {
        let mut report = String::new();
        let mut total = 0usize;

        for file in files {
            let path = self.root.join(file);
            let bytes = fs::read(&path).map_err(|e| MaintError::fs(&path, e))?;
            let source = String::from_utf8_lossy(&bytes);

            for finding in self.check_source(&source) {
                total += 1;
                let _ = writeln!(
                    report,
                    "{}:{}:{}: {} {}",
                    file.display(),
                    finding.line,
                    finding.column,
                    finding.code,
                    finding.message
                );
            }
        }

        tracing::debug!(findings = total, "Builtin check done");

        Ok(CheckOutcome {
            code: if total == 0 { 0 } else { 1 },
            stdout: report.into_bytes(),
            stderr: vec![],
        })
    }
}
