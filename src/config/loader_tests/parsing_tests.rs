//! Tests for reading and parsing explicit config files.

use std::path::{Path, PathBuf};

use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::ApplyListError;

use super::mock_fs::MockFileSystem;

#[test]
fn load_from_explicit_path() {
    let fs = MockFileSystem::new().with_file(
        "/etc/apply-list.toml",
        "[lists]\ninclusion = \"/etc/whitelist\"\n",
    );

    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/etc/apply-list.toml"))
        .unwrap();

    assert_eq!(
        result.config.lists.inclusion,
        Some(PathBuf::from("/etc/whitelist"))
    );
    assert_eq!(result.source, Some(PathBuf::from("/etc/apply-list.toml")));
}

#[test]
fn missing_explicit_path_is_file_access_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader
        .load_from_path(Path::new("/nowhere.toml"))
        .unwrap_err();

    assert!(matches!(err, ApplyListError::FileAccess { .. }));
}

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.apply-list.toml", "[lists\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, ApplyListError::TomlParse(_)));
}

#[test]
fn unknown_field_is_parse_error() {
    let fs = MockFileSystem::new().with_file(
        "/project/.apply-list.toml",
        "[lists]\npatterns = [\"*.yaml\"]\n",
    );

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert_eq!(err.error_type(), "Config");
}
