//! Per-file and total line counts over the source files of a tree.

mod counter;
mod report;

pub use counter::{count_lines, count_reader_lines, LineCounter};
pub use report::{FileRecord, Report};
