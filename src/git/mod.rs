mod lister;

pub use lister::GitFileLister;

#[cfg(test)]
#[path = "lister_tests.rs"]
mod tests;
