use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where the full file enumeration comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumerationSource {
    /// Files tracked in the git index (`git ls-files`).
    #[default]
    Git,
    /// Every regular file on disk, `.git` excluded.
    Filesystem,
}

impl std::str::FromStr for EnumerationSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "git" => Ok(Self::Git),
            "filesystem" | "fs" => Ok(Self::Filesystem),
            _ => Err(format!("Unknown enumeration source: {s}")),
        }
    }
}

/// `[repository]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    /// Root directory whose files are listed. Defaults to the current directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub source: EnumerationSource,
}

/// `[lists]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListsConfig {
    /// Exclusion list file (a.k.a. blacklist).
    #[serde(default, alias = "blacklist", skip_serializing_if = "Option::is_none")]
    pub exclusion: Option<PathBuf>,

    /// Inclusion list file (a.k.a. whitelist).
    #[serde(default, alias = "whitelist", skip_serializing_if = "Option::is_none")]
    pub inclusion: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub lists: ListsConfig,
}

/// Empty path means "not configured"; relative paths hang off `base`.
fn resolve_path(path: Option<PathBuf>, base: &Path) -> Option<PathBuf> {
    let path = path.filter(|p| !p.as_os_str().is_empty())?;
    if path.is_absolute() {
        Some(path)
    } else {
        Some(base.join(path))
    }
}

impl Config {
    /// Drop empty paths and anchor relative ones at `base`
    /// (the directory holding the config file).
    #[must_use]
    pub fn resolved_against(self, base: &Path) -> Self {
        Self {
            repository: RepositoryConfig {
                path: resolve_path(self.repository.path, base),
                source: self.repository.source,
            },
            lists: ListsConfig {
                exclusion: resolve_path(self.lists.exclusion, base),
                inclusion: resolve_path(self.lists.inclusion, base),
            },
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
