use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::FileEnumerator;
use crate::error::{ApplyListError, Result};

/// Directory names never descended into.
const SKIPPED_DIRS: [&str; 1] = [".git"];

/// Lists every regular file under a root directory.
///
/// Used when the tree is not a git checkout. Symlinks are not followed.
pub struct DirectoryEnumerator {
    root: PathBuf,
}

impl DirectoryEnumerator {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn is_skipped(entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| SKIPPED_DIRS.contains(&name))
    }

    /// Regular files, plus symlinks that do not resolve to a directory.
    /// Git tracks a symlinked manifest as a file entry.
    fn is_listed(entry: &DirEntry) -> bool {
        entry.file_type().is_file() || (entry.path_is_symlink() && !entry.path().is_dir())
    }

    fn relative_path(&self, path: &Path) -> Result<String> {
        let relative = path.strip_prefix(&self.root).map_err(|_| {
            ApplyListError::Enumeration(format!(
                "Walked path {} is not under {}",
                path.display(),
                self.root.display()
            ))
        })?;
        let segments: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        Ok(segments.join("/"))
    }
}

impl FileEnumerator for DirectoryEnumerator {
    fn list_all_files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !Self::is_skipped(e));

        for entry in walker {
            let entry = entry.map_err(|e| {
                ApplyListError::Enumeration(format!(
                    "Failed to walk {}: {e}",
                    self.root.display()
                ))
            })?;
            if Self::is_listed(&entry) {
                files.push(self.relative_path(entry.path())?);
            }
        }

        tracing::debug!("{}: {} files on disk", self.root.display(), files.len());
        Ok(files)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
