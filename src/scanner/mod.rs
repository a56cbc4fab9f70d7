mod directory;

pub use directory::DirectoryEnumerator;

use crate::error::Result;

/// Trait for listing every file of the repository under the configured root.
pub trait FileEnumerator {
    /// Return all file paths relative to the root, `/`-separated, in the
    /// enumerator's natural order. Duplicates are passed through.
    ///
    /// # Errors
    /// Returns an error if the repository or directory cannot be listed.
    fn list_all_files(&self) -> Result<Vec<String>>;
}

impl<T: FileEnumerator + ?Sized> FileEnumerator for &T {
    fn list_all_files(&self) -> Result<Vec<String>> {
        (**self).list_all_files()
    }
}

impl<T: FileEnumerator + ?Sized> FileEnumerator for Box<T> {
    fn list_all_files(&self) -> Result<Vec<String>> {
        (**self).list_all_files()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
