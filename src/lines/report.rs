use std::fmt::Write as _;
use std::path::PathBuf;

/// Line count of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub lines: u64,
}

/// Ordered file records and their total.
///
/// The total is kept equal to the sum of the record counts; records can
/// only be added through [`Report::push`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    records: Vec<FileRecord>,
    total: u64,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<PathBuf>, lines: u64) {
        self.total += lines;
        self.records.push(FileRecord {
            path: path.into(),
            lines,
        });
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the report: one `<count> <path>` line per file with the count
    /// right-justified to `width`, then the total, then a blank line.
    pub fn render(&self, width: usize) -> String {
        let mut out = String::new();
        for record in &self.records {
            let _ = writeln!(
                out,
                "{:>width$} {}",
                record.lines,
                record.path.display(),
                width = width
            );
        }
        let _ = writeln!(out, "{}", self.total);
        out.push('\n');
        out
    }
}
