//! Line-by-line file comparison.
//!
//! Compares two texts by line index after trimming trailing whitespace.
//! Used to check a generated report against a reference output.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::Error;

/// Placeholder for a line the shorter file does not have.
pub const MISSING_LINE: &str = "<no line>";

/// A line that differs between the two inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDifference {
    /// 1-based line number.
    pub line: usize,
    /// Line from the first file, or [`MISSING_LINE`].
    pub left: String,
    /// Line from the second file, or [`MISSING_LINE`].
    pub right: String,
}

/// Result of comparing two texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    /// Differing lines, in order.
    pub differences: Vec<LineDifference>,
}

impl DiffReport {
    /// Whether the inputs match line for line.
    pub fn is_match(&self) -> bool {
        self.differences.is_empty()
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_match() {
            return write!(f, "The files match exactly.");
        }
        write!(f, "Differences found:")?;
        for d in &self.differences {
            write!(
                f,
                "\nLine {}:\n  File1: {}\n  File2: {}\n",
                d.line, d.left, d.right
            )?;
        }
        Ok(())
    }
}

/// Compares two texts line by line.
pub fn compare_text(left: &str, right: &str) -> DiffReport {
    let left: Vec<&str> = left.lines().map(str::trim_end).collect();
    let right: Vec<&str> = right.lines().map(str::trim_end).collect();

    let differences = (0..left.len().max(right.len()))
        .filter_map(|i| {
            let a = left.get(i).copied().unwrap_or(MISSING_LINE);
            let b = right.get(i).copied().unwrap_or(MISSING_LINE);
            (a != b).then(|| LineDifference {
                line: i + 1,
                left: a.to_string(),
                right: b.to_string(),
            })
        })
        .collect();

    DiffReport { differences }
}

/// Reads and compares two files.
pub fn compare_files(left: &Path, right: &Path) -> Result<DiffReport, Error> {
    let read = |path: &Path| {
        fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })
    };
    Ok(compare_text(&read(left)?, &read(right)?))
}
