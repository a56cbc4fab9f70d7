#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the apply-list binary, isolated from
/// any `APPLY_LIST_*` variables in the caller's environment.
#[macro_export]
macro_rules! apply_list {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("apply-list"));
        cmd.env_remove("APPLY_LIST_REPO_PATH")
            .env_remove("APPLY_LIST_EXCLUSION_LIST")
            .env_remove("APPLY_LIST_INCLUSION_LIST")
            .env_remove("RUST_LOG");
        cmd
    }};
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Canonical form of the temp directory, as it appears in built lists.
    pub fn root(&self) -> String {
        dunce::canonicalize(self.dir.path())
            .expect("Failed to canonicalize temp directory")
            .to_string_lossy()
            .into_owned()
    }

    /// Creates a local apply-list config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".apply-list.toml", content);
    }

    /// Creates a small manifest tree: two applicable files, one image and
    /// one extensionless file.
    pub fn create_manifests(&self) {
        self.create_file("a.json", "{}");
        self.create_file("a/b.yaml", "kind: ConfigMap\n");
        self.create_file("b.jpg", "");
        self.create_file("a/b", "");
    }

    /// Runs `git init` in the temp directory.
    pub fn git_init(&self) {
        self.git(&["init"]);
    }

    /// Stages the given paths.
    pub fn git_add(&self, paths: &[&str]) {
        let mut args = vec!["add"];
        args.extend_from_slice(paths);
        self.git(&args);
    }

    fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run git");
        assert!(output.status.success(), "git {args:?} failed");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Config selecting the filesystem source with both list files.
pub const FILESYSTEM_CONFIG: &str = r#"
[repository]
source = "filesystem"

[lists]
exclusion = "blacklist"
inclusion = "whitelist"
"#;
