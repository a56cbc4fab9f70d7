use std::path::{Path, PathBuf};

use crate::cli::SourceArgs;
use crate::config::{
    Config, ConfigLoader, EnumerationSource, FileConfigLoader, FileSystem, ListsConfig,
    LoadResult, RepositoryConfig,
};
use crate::error::Result;

/// Effective settings for one run: config file values with CLI flags
/// (and their environment variables) layered on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub exclusion_list: Option<PathBuf>,
    pub inclusion_list: Option<PathBuf>,
    pub source: EnumerationSource,
    /// Config file the settings were read from, if any.
    pub config_file: Option<PathBuf>,
}

impl Settings {
    /// Settings in config file form, for display.
    #[must_use]
    pub fn to_config(&self) -> Config {
        Config {
            repository: RepositoryConfig {
                path: Some(self.root.clone()),
                source: self.source,
            },
            lists: ListsConfig {
                exclusion: self.exclusion_list.clone(),
                inclusion: self.inclusion_list.clone(),
            },
        }
    }
}

fn non_empty(path: Option<&Path>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

fn load_config<F: FileSystem>(
    loader: &FileConfigLoader<F>,
    config_path: Option<&Path>,
    no_config: bool,
) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Merge CLI arguments over the loaded configuration.
///
/// A flag given as an empty string clears the corresponding config value.
#[must_use]
pub fn merge_settings(args: &SourceArgs, loaded: LoadResult) -> Settings {
    let LoadResult { config, source } = loaded;

    let pick = |flag: Option<&Path>, configured: Option<PathBuf>| match flag {
        Some(_) => non_empty(flag),
        None => configured,
    };

    Settings {
        root: pick(args.repo.as_deref(), config.repository.path)
            .unwrap_or_else(|| PathBuf::from(".")),
        exclusion_list: pick(args.exclusion_list.as_deref(), config.lists.exclusion),
        inclusion_list: pick(args.inclusion_list.as_deref(), config.lists.inclusion),
        source: args.source.unwrap_or(config.repository.source),
        config_file: source,
    }
}

/// Load configuration (unless `no_config`) and apply CLI overrides.
///
/// # Errors
/// Returns an error if an explicit or discovered config file cannot be read or parsed.
pub fn resolve_settings(args: &SourceArgs, no_config: bool) -> Result<Settings> {
    resolve_settings_with(&FileConfigLoader::new(), args, no_config)
}

/// [`resolve_settings`] with an explicit loader.
///
/// # Errors
/// Returns an error if an explicit or discovered config file cannot be read or parsed.
pub fn resolve_settings_with<F: FileSystem>(
    loader: &FileConfigLoader<F>,
    args: &SourceArgs,
    no_config: bool,
) -> Result<Settings> {
    let loaded = load_config(loader, args.config.as_deref(), no_config)?;
    Ok(merge_settings(args, loaded))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
