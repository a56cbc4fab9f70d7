use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplyListError {
    #[error("Failed to read list file: {path}: {source}")]
    ListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to enumerate repository files: {0}")]
    Enumeration(String),

    #[error("Not a git repository: {0}")]
    GitRepoNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ApplyListError {
    /// Short category name, used in diagnostics and JSON error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::ListRead { .. } => "ListRead",
            Self::Enumeration(_) | Self::GitRepoNotFound(_) => "Enumeration",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileAccess { .. } | Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Whether the error came from one of the build collaborators
    /// (list reading or repository enumeration) rather than from setup.
    #[must_use]
    pub const fn is_build_failure(&self) -> bool {
        matches!(
            self,
            Self::ListRead { .. } | Self::Enumeration(_) | Self::GitRepoNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ApplyListError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
