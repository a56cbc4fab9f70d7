use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use super::*;
use crate::error::ApplyListError;
use crate::scanner::FileEnumerator;

fn create_git_repo() -> TempDir {
    let dir = TempDir::new().unwrap();

    Command::new("git")
        .args(["init"])
        .current_dir(dir.path())
        .output()
        .expect("Failed to init git repo");

    Command::new("git")
        .args(["config", "user.email", "test@test.com"])
        .current_dir(dir.path())
        .output()
        .expect("Failed to config git user email");

    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(dir.path())
        .output()
        .expect("Failed to config git user name");

    dir
}

fn create_file(dir: &Path, name: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, "kind: ConfigMap\n").unwrap();
}

fn git_add(dir: &Path, pathspec: &str) {
    Command::new("git")
        .args(["add", pathspec])
        .current_dir(dir)
        .output()
        .expect("Failed to git add");
}

fn git_commit(dir: &Path, message: &str) {
    Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(dir)
        .output()
        .expect("Failed to git commit");
}

fn sorted(mut files: Vec<String>) -> Vec<String> {
    files.sort();
    files
}

#[test]
fn lists_committed_files() {
    let dir = create_git_repo();
    create_file(dir.path(), "a.json");
    create_file(dir.path(), "a/b.yaml");
    git_add(dir.path(), ".");
    git_commit(dir.path(), "initial");

    let files = GitFileLister::new(dir.path()).list_all_files().unwrap();

    assert_eq!(sorted(files), vec!["a.json", "a/b.yaml"]);
}

#[test]
fn lists_staged_but_uncommitted_files() {
    let dir = create_git_repo();
    create_file(dir.path(), "staged.json");
    git_add(dir.path(), "staged.json");

    let files = GitFileLister::new(dir.path()).list_all_files().unwrap();

    assert_eq!(files, vec!["staged.json"]);
}

#[test]
fn ignores_untracked_files() {
    let dir = create_git_repo();
    create_file(dir.path(), "tracked.yaml");
    git_add(dir.path(), "tracked.yaml");
    git_commit(dir.path(), "initial");
    create_file(dir.path(), "untracked.yaml");

    let files = GitFileLister::new(dir.path()).list_all_files().unwrap();

    assert_eq!(files, vec!["tracked.yaml"]);
}

#[test]
fn empty_repository_lists_nothing() {
    let dir = create_git_repo();

    let files = GitFileLister::new(dir.path()).list_all_files().unwrap();

    assert!(files.is_empty());
}

#[test]
fn subdirectory_root_is_restricted_and_relative() {
    let dir = create_git_repo();
    create_file(dir.path(), "top.json");
    create_file(dir.path(), "manifests/app.yaml");
    create_file(dir.path(), "manifests/db/svc.json");
    create_file(dir.path(), "manifests-old/legacy.json");
    git_add(dir.path(), ".");
    git_commit(dir.path(), "initial");

    let files = GitFileLister::new(dir.path().join("manifests"))
        .list_all_files()
        .unwrap();

    assert_eq!(sorted(files), vec!["app.yaml", "db/svc.json"]);
}

#[test]
fn nonexistent_path_is_an_error() {
    let result =
        GitFileLister::new("/nonexistent/path/that/does/not/exist").list_all_files();

    assert!(matches!(
        result,
        Err(ApplyListError::GitRepoNotFound(_) | ApplyListError::Enumeration(_))
    ));
}
