use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::config::Config;
use crate::error::{MaintError, Result};
use crate::lines::report::Report;
use crate::walk;

/// Counts lines of every file with a given extension under a root.
#[derive(Debug, Clone)]
pub struct LineCounter {
    extension: String,
    exclude: Vec<String>,
}

impl LineCounter {
    pub fn new(extension: impl Into<String>, exclude: Vec<String>) -> Self {
        Self {
            extension: extension.into(),
            exclude,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.project.source_extension.clone(),
            config.project.exclude.clone(),
        )
    }

    /// Walk `root` and count every matching file.
    ///
    /// Paths in the report are relative to `root`. Any enumeration or read
    /// failure fails the whole count.
    pub fn count(&self, root: &Path) -> Result<Report> {
        let mut report = Report::new();

        let walker = walk::walker(root)
            .into_iter()
            .filter_entry(|e| !walk::is_excluded(e, &self.exclude));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() || !self.matches(entry.path()) {
                continue;
            }

            let lines = count_file_lines(entry.path())?;
            tracing::trace!(path = %entry.path().display(), lines, "Counted");
            report.push(walk::relative_to(entry.path(), root), lines);
        }

        tracing::debug!(files = report.records().len(), total = report.total(), "Line count done");
        Ok(report)
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == self.extension.as_str())
    }
}

/// Count lines under `root` using the configured extension and excludes.
pub fn count_lines(root: &Path, config: &Config) -> Result<Report> {
    LineCounter::from_config(config).count(root)
}

fn count_file_lines(path: &Path) -> Result<u64> {
    let file = File::open(path).map_err(|e| MaintError::fs(path, e))?;
    count_reader_lines(BufReader::new(file)).map_err(|e| MaintError::fs(path, e))
}

/// Count `\n`-terminated lines, plus a final unterminated one if present.
///
/// `"a\nb"` and `"a\nb\n"` both count 2; empty input counts 0.
pub fn count_reader_lines<R: Read>(mut reader: R) -> io::Result<u64> {
    let mut buf = [0u8; 64 * 1024];
    let mut lines = 0u64;
    let mut last = None;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        lines += buf[..n].iter().filter(|&&b| b == b'\n').count() as u64;
        last = Some(buf[n - 1]);
    }

    match last {
        Some(b) if b != b'\n' => Ok(lines + 1),
        _ => Ok(lines),
    }
}
