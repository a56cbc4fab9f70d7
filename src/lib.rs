pub mod builder;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod listfile;
pub mod output;
pub mod path_utils;
pub mod scanner;

pub use builder::{ApplyListSource, ApplyLists, ListBuilder};
pub use error::{ApplyListError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_BUILD_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
