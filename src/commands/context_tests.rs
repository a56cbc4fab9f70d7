use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;
use crate::config::{EnumerationSource, FileConfigLoader, FileSystem};

struct StaticFs {
    files: HashMap<PathBuf, String>,
}

impl StaticFs {
    fn with_local_config(content: &str) -> Self {
        let mut files = HashMap::new();
        files.insert(PathBuf::from("/work/.apply-list.toml"), content.to_string());
        Self { files }
    }

    fn empty() -> Self {
        Self {
            files: HashMap::new(),
        }
    }
}

impl FileSystem for StaticFs {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(PathBuf::from("/work"))
    }

    fn config_dir(&self) -> Option<PathBuf> {
        None
    }
}

const LOCAL_CONFIG: &str = r#"
[repository]
path = "manifests"
source = "filesystem"

[lists]
exclusion = "blacklist"
inclusion = "whitelist"
"#;

#[test]
fn defaults_without_config_or_flags() {
    let loader = FileConfigLoader::with_fs(StaticFs::empty());
    let settings = resolve_settings_with(&loader, &SourceArgs::default(), false).unwrap();

    assert_eq!(
        settings,
        Settings {
            root: PathBuf::from("."),
            exclusion_list: None,
            inclusion_list: None,
            source: EnumerationSource::Git,
            config_file: None,
        }
    );
}

#[test]
fn config_values_are_used() {
    let loader = FileConfigLoader::with_fs(StaticFs::with_local_config(LOCAL_CONFIG));
    let settings = resolve_settings_with(&loader, &SourceArgs::default(), false).unwrap();

    assert_eq!(settings.root, PathBuf::from("/work/manifests"));
    assert_eq!(settings.exclusion_list, Some(PathBuf::from("/work/blacklist")));
    assert_eq!(settings.inclusion_list, Some(PathBuf::from("/work/whitelist")));
    assert_eq!(settings.source, EnumerationSource::Filesystem);
    assert_eq!(
        settings.config_file,
        Some(PathBuf::from("/work/.apply-list.toml"))
    );
}

#[test]
fn flags_override_config() {
    let loader = FileConfigLoader::with_fs(StaticFs::with_local_config(LOCAL_CONFIG));
    let args = SourceArgs {
        repo: Some(PathBuf::from("/repo")),
        exclusion_list: Some(PathBuf::from("/other/blacklist")),
        source: Some(EnumerationSource::Git),
        ..SourceArgs::default()
    };

    let settings = resolve_settings_with(&loader, &args, false).unwrap();

    assert_eq!(settings.root, PathBuf::from("/repo"));
    assert_eq!(settings.exclusion_list, Some(PathBuf::from("/other/blacklist")));
    assert_eq!(settings.inclusion_list, Some(PathBuf::from("/work/whitelist")));
    assert_eq!(settings.source, EnumerationSource::Git);
}

#[test]
fn empty_flag_clears_config_value() {
    let loader = FileConfigLoader::with_fs(StaticFs::with_local_config(LOCAL_CONFIG));
    let args = SourceArgs {
        inclusion_list: Some(PathBuf::new()),
        ..SourceArgs::default()
    };

    let settings = resolve_settings_with(&loader, &args, false).unwrap();

    assert!(settings.inclusion_list.is_none());
    assert!(settings.exclusion_list.is_some());
}

#[test]
fn no_config_skips_discovery() {
    let loader = FileConfigLoader::with_fs(StaticFs::with_local_config(LOCAL_CONFIG));
    let settings = resolve_settings_with(&loader, &SourceArgs::default(), true).unwrap();

    assert_eq!(settings.root, PathBuf::from("."));
    assert!(settings.exclusion_list.is_none());
    assert!(settings.config_file.is_none());
}

#[test]
fn explicit_missing_config_is_an_error() {
    let loader = FileConfigLoader::with_fs(StaticFs::empty());
    let args = SourceArgs {
        config: Some(PathBuf::from("/missing.toml")),
        ..SourceArgs::default()
    };

    assert!(resolve_settings_with(&loader, &args, false).is_err());
}

#[test]
fn to_config_round_trips_settings() {
    let settings = Settings {
        root: PathBuf::from("/repo"),
        exclusion_list: Some(PathBuf::from("/b")),
        inclusion_list: None,
        source: EnumerationSource::Filesystem,
        config_file: None,
    };

    let config = settings.to_config();

    assert_eq!(config.repository.path, Some(PathBuf::from("/repo")));
    assert_eq!(config.repository.source, EnumerationSource::Filesystem);
    assert_eq!(config.lists.exclusion, Some(PathBuf::from("/b")));
    assert!(config.lists.inclusion.is_none());
}
