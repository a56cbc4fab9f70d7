//! Computes the apply list together with the resolved exclusion and
//! inclusion lists.
//!
//! [`ListBuilder::build`] runs three steps in a fixed order: load the
//! exclusion list, load the inclusion list, then enumerate and filter the
//! repository. The first failing step aborts the build; the repository is
//! only enumerated once both lists have loaded.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::listfile::{LineReader, load_path_list};
use crate::path_utils::{has_apply_extension, join_all, sort_paths};
use crate::scanner::FileEnumerator;

/// The three sorted lists produced by a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyLists {
    /// Files the downstream apply step should process.
    pub apply: Vec<String>,
    /// Resolved exclusion list, independent of what the repository contains.
    pub exclusions: Vec<String>,
    /// Resolved inclusion list. Empty means no inclusion filter.
    pub inclusions: Vec<String>,
}

/// Anything that can produce [`ApplyLists`].
///
/// Lets a runner swap the real builder for a canned result in tests.
pub trait ApplyListSource {
    /// Compute the lists.
    ///
    /// # Errors
    /// Returns the first collaborator error; no partial lists are returned.
    fn build(&self) -> Result<ApplyLists>;
}

/// Membership filter applied to every enumerated path.
struct ApplyFilter<'a> {
    excluded: HashSet<&'a str>,
    /// `None` when no inclusion list is in effect.
    included: Option<HashSet<&'a str>>,
}

impl<'a> ApplyFilter<'a> {
    fn new(exclusions: &'a [String], inclusions: &'a [String]) -> Self {
        let excluded = exclusions.iter().map(String::as_str).collect();
        let included = (!inclusions.is_empty())
            .then(|| inclusions.iter().map(String::as_str).collect());
        Self { excluded, included }
    }

    fn should_apply(&self, path: &str) -> bool {
        let include_ok = self
            .included
            .as_ref()
            .is_none_or(|included| included.contains(path));
        let exclude_ok = !self.excluded.contains(path);
        include_ok && exclude_ok && has_apply_extension(path)
    }
}

/// Builds apply lists for one repository root.
///
/// Holds only configuration and collaborator handles; every call to
/// [`build`](Self::build) starts from scratch.
pub struct ListBuilder<R: LineReader, E: FileEnumerator> {
    root: String,
    exclusion_list: Option<PathBuf>,
    inclusion_list: Option<PathBuf>,
    reader: R,
    enumerator: E,
}

impl<R: LineReader, E: FileEnumerator> ListBuilder<R, E> {
    #[must_use]
    pub fn new(root: impl Into<String>, reader: R, enumerator: E) -> Self {
        Self {
            root: root.into(),
            exclusion_list: None,
            inclusion_list: None,
            reader,
            enumerator,
        }
    }

    #[must_use]
    pub fn with_exclusion_list(mut self, path: Option<PathBuf>) -> Self {
        self.exclusion_list = path;
        self
    }

    #[must_use]
    pub fn with_inclusion_list(mut self, path: Option<PathBuf>) -> Self {
        self.inclusion_list = path;
        self
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn exclusion_list(&self) -> Option<&Path> {
        self.exclusion_list.as_deref()
    }

    #[must_use]
    pub fn inclusion_list(&self) -> Option<&Path> {
        self.inclusion_list.as_deref()
    }

    /// Load exclusions, then inclusions, then resolve the apply list.
    ///
    /// # Errors
    /// Returns the list reader's error if a configured list cannot be read,
    /// or the enumerator's error if the repository cannot be listed.
    pub fn build(&self) -> Result<ApplyLists> {
        let exclusions = self.load_exclusions()?;
        let inclusions = self.load_inclusions()?;
        let apply = self.resolve_apply_list(&exclusions, &inclusions)?;

        tracing::info!(
            "{} files to apply ({} excluded, {} included)",
            apply.len(),
            exclusions.len(),
            inclusions.len()
        );

        Ok(ApplyLists {
            apply,
            exclusions,
            inclusions,
        })
    }

    fn load_exclusions(&self) -> Result<Vec<String>> {
        load_path_list(&self.root, self.exclusion_list.as_deref(), &self.reader)
    }

    fn load_inclusions(&self) -> Result<Vec<String>> {
        load_path_list(&self.root, self.inclusion_list.as_deref(), &self.reader)
    }

    fn resolve_apply_list(
        &self,
        exclusions: &[String],
        inclusions: &[String],
    ) -> Result<Vec<String>> {
        let relative = self.enumerator.list_all_files()?;
        let candidates = join_all(&self.root, &relative);
        let filter = ApplyFilter::new(exclusions, inclusions);

        let mut apply: Vec<String> = candidates
            .into_iter()
            .filter(|path| filter.should_apply(path))
            .collect();
        sort_paths(&mut apply);

        tracing::debug!("{} of {} repository files kept", apply.len(), relative.len());
        Ok(apply)
    }
}

impl<R: LineReader, E: FileEnumerator> ApplyListSource for ListBuilder<R, E> {
    fn build(&self) -> Result<ApplyLists> {
        Self::build(self)
    }
}

#[cfg(test)]
#[path = "builder_tests/mod.rs"]
mod tests;
