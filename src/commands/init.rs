use std::fs;

use crate::{ApplyListError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ApplyListError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# apply-list configuration file
#
# Relative paths are resolved against the directory containing this file.
# Command line flags and APPLY_LIST_* environment variables take precedence.

[repository]
# Root directory whose manifests are listed (default: current directory)
# path = "."

# Where the full file list comes from:
#   "git"        - files tracked in the git index (like `git ls-files`)
#   "filesystem" - every file on disk, .git excluded
source = "git"

[lists]
# One path per line, relative to the repository root.
# Lines starting with '#' and blank lines are ignored.

# Paths never applied, even when listed for inclusion
# exclusion = "blacklist"

# When set and non-empty, only these paths are applied
# inclusion = "whitelist"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
