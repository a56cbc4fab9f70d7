use std::path::{Path, PathBuf};

use crate::error::{ApplyListError, Result};
use crate::scanner::FileEnumerator;

/// Lists the files tracked by git under a directory.
///
/// Reads the index of the repository containing `root` and returns the
/// entries inside `root`, relative to it. This is what `git ls-files` prints
/// when run from `root`: staged-but-uncommitted files are included,
/// untracked and ignored files are not.
#[derive(Debug, Clone)]
pub struct GitFileLister {
    root: PathBuf,
}

impl GitFileLister {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn open_repo(&self) -> Result<gix::Repository> {
        gix::discover(&self.root).map_err(|e| {
            ApplyListError::GitRepoNotFound(format!("{}: {e}", self.root.display()))
        })
    }

    /// Path of `root` inside the work tree, `/`-separated, empty at the top.
    fn workdir_prefix(&self, workdir: &Path) -> Result<String> {
        let root_abs = dunce::canonicalize(&self.root).map_err(|e| {
            ApplyListError::Enumeration(format!(
                "Cannot canonicalize path {}: {e}",
                self.root.display()
            ))
        })?;
        let workdir_abs = dunce::canonicalize(workdir).map_err(|e| {
            ApplyListError::Enumeration(format!(
                "Cannot canonicalize workdir {}: {e}",
                workdir.display()
            ))
        })?;

        let relative = root_abs.strip_prefix(&workdir_abs).map_err(|_| {
            ApplyListError::Enumeration(format!(
                "Path {} is not within git workdir {}",
                root_abs.display(),
                workdir_abs.display()
            ))
        })?;

        let segments: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        Ok(segments.join("/"))
    }
}

/// Strip `prefix/` from an index path, or `None` when outside the prefix.
fn strip_index_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return Some(path);
    }
    path.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('/'))
}

impl FileEnumerator for GitFileLister {
    fn list_all_files(&self) -> Result<Vec<String>> {
        let repo = self.open_repo()?;
        let workdir = repo.workdir().ok_or_else(|| {
            ApplyListError::Enumeration("Repository has no working directory".into())
        })?;
        let prefix = self.workdir_prefix(workdir)?;

        let index = repo
            .index_or_empty()
            .map_err(|e| ApplyListError::Enumeration(format!("Failed to get git index: {e}")))?;
        let state: &gix::index::State = &index;

        let files: Vec<String> = state
            .entries()
            .iter()
            .filter_map(|entry| {
                let path = String::from_utf8_lossy(entry.path(state));
                strip_index_prefix(&path, &prefix).map(str::to_string)
            })
            .collect();

        tracing::debug!(
            "{}: {} tracked files (index has {})",
            self.root.display(),
            files.len(),
            state.entries().len()
        );
        Ok(files)
    }
}
