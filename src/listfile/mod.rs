//! Exclusion and inclusion list files.
//!
//! A list file holds one path per line, relative to the repository root.
//! Lines whose first character is `#` are comments and blank lines are
//! ignored. There is no quoting, escaping, or pattern syntax.

mod reader;

pub use reader::{FsLineReader, LineReader};

use std::path::Path;

use crate::error::Result;
use crate::path_utils::{join_all, sort_paths};

/// Marker that turns a line into a comment when it is the first character.
pub const COMMENT_MARKER: char = '#';

/// Drop blank lines and comment lines, keeping the order of the rest.
///
/// Only column 0 is inspected: `" #x"` is kept as a path.
#[must_use]
pub fn strip_comments<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(str::to_string)
        .collect()
}

/// Whether a configured list path means "no list".
#[must_use]
pub fn is_unconfigured(list_path: Option<&Path>) -> bool {
    list_path.is_none_or(|p| p.as_os_str().is_empty())
}

/// Read a list file and resolve it into sorted absolute paths.
///
/// An unconfigured list (`None` or an empty path) yields an empty list and
/// the reader is not called.
///
/// # Errors
/// Returns the reader's error unchanged when the list file cannot be read.
pub fn load_path_list<R: LineReader + ?Sized>(
    root: &str,
    list_path: Option<&Path>,
    reader: &R,
) -> Result<Vec<String>> {
    let Some(path) = list_path.filter(|p| !is_unconfigured(Some(*p))) else {
        return Ok(Vec::new());
    };

    let raw = reader.read_lines(path)?;
    let entries = strip_comments(&raw);
    tracing::debug!(
        "{}: {} entries ({} lines read)",
        path.display(),
        entries.len(),
        raw.len()
    );

    let mut list = join_all(root, &entries);
    sort_paths(&mut list);
    Ok(list)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
