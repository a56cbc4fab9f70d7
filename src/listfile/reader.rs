use std::path::Path;

use crate::error::{ApplyListError, Result};

/// Source of raw list-file lines.
pub trait LineReader {
    /// Read `path` as an ordered sequence of lines, one entry per line.
    ///
    /// # Errors
    /// Returns [`ApplyListError::ListRead`] if the file is missing or unreadable.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;
}

impl<T: LineReader + ?Sized> LineReader for &T {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        (**self).read_lines(path)
    }
}

/// Reads list files from the local filesystem.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// stray Latin-1 byte in a comment does not fail the read.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLineReader;

impl LineReader for FsLineReader {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = std::fs::read(path).map_err(|source| ApplyListError::ListRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect())
    }
}
