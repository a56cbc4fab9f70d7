/// Extensions (without the dot) of the files that belong in an apply list.
pub const APPLY_EXTENSIONS: [&str; 2] = ["json", "yaml"];

/// Join a repository root and a relative path with a single `/`.
///
/// Leading `./` segments of `relative` are dropped so that `./a.json` names
/// the same file as `a.json`. Otherwise this is a plain segment join: `..`
/// and symlinks are left alone, and an empty root returns the relative path
/// unchanged.
///
/// # Examples
///
/// - `("/repo", "a/b.json")` gives `"/repo/a/b.json"`
/// - `("/repo/", "/a.json")` gives `"/repo/a.json"`
/// - `("/repo", "./a.json")` gives `"/repo/a.json"`
/// - `("", "a.json")` gives `"a.json"`
#[must_use]
pub fn join_root(root: &str, relative: &str) -> String {
    if root.is_empty() {
        return relative.to_string();
    }
    format!(
        "{}/{}",
        root.trim_end_matches('/'),
        trim_current_dir(relative)
    )
}

fn trim_current_dir(relative: &str) -> &str {
    let mut rest = relative.trim_start_matches('/');
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped.trim_start_matches('/');
    }
    rest
}

/// Join the root onto every entry of `relatives`, keeping order.
#[must_use]
pub fn join_all<S: AsRef<str>>(root: &str, relatives: &[S]) -> Vec<String> {
    relatives
        .iter()
        .map(|rel| join_root(root, rel.as_ref()))
        .collect()
}

/// Final `.ext` suffix of the last segment, dot included.
///
/// Returns `None` when the last segment has no dot. A dot-file such as
/// `.yaml` counts as having the extension `.yaml`.
#[must_use]
pub fn extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.rfind('.').map(|idx| &name[idx..])
}

/// Case-sensitive check against [`APPLY_EXTENSIONS`].
#[must_use]
pub fn has_apply_extension(path: &str) -> bool {
    extension(path).is_some_and(|ext| {
        APPLY_EXTENSIONS
            .iter()
            .any(|allowed| ext.strip_prefix('.') == Some(*allowed))
    })
}

/// Sort path strings by byte order, keeping duplicates.
///
/// `PathBuf` ordering compares components, which would put `/repo/a/b.yaml`
/// before `/repo/a.json`; list output is ordered on the raw string.
pub fn sort_paths(paths: &mut [String]) {
    paths.sort_unstable();
}
