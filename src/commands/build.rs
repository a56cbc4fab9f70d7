use std::fs;
use std::path::Path;

use crate::builder::{ApplyLists, ListBuilder};
use crate::cli::{BuildArgs, Cli};
use crate::config::EnumerationSource;
use crate::error::{ApplyListError, Result};
use crate::git::GitFileLister;
use crate::listfile::FsLineReader;
use crate::scanner::{DirectoryEnumerator, FileEnumerator};
use crate::{EXIT_BUILD_ERROR, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{Settings, resolve_settings};

#[must_use]
pub fn run_build(args: &BuildArgs, cli: &Cli) -> i32 {
    match run_build_impl(args, cli) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

/// Exit code for a failed build.
#[must_use]
pub const fn exit_code_for(error: &ApplyListError) -> i32 {
    if error.is_build_failure() {
        EXIT_BUILD_ERROR
    } else {
        EXIT_CONFIG_ERROR
    }
}

/// Resolves settings, builds the lists and writes them out.
///
/// # Errors
/// Returns an error if configuration is invalid, a list file cannot be read,
/// the repository cannot be enumerated, or the output cannot be written.
pub fn run_build_impl(args: &BuildArgs, cli: &Cli) -> Result<ApplyLists> {
    let settings = resolve_settings(&args.source, cli.no_config)?;
    if let Some(file) = &settings.config_file {
        tracing::info!("Using configuration {}", file.display());
    }

    let lists = build_lists(&settings)?;

    let output = args.format.formatter(cli.verbose).format(&lists)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;
    Ok(lists)
}

/// Build the lists for already-resolved settings.
///
/// # Errors
/// Returns an error if the root does not exist, a list file cannot be read,
/// or the repository cannot be enumerated.
pub fn build_lists(settings: &Settings) -> Result<ApplyLists> {
    let root = dunce::canonicalize(&settings.root).map_err(|source| ApplyListError::FileAccess {
        path: settings.root.clone(),
        source,
    })?;
    tracing::debug!("Repository root {} ({:?})", root.display(), settings.source);

    let enumerator = make_enumerator(settings.source, &root);
    let builder = ListBuilder::new(root.to_string_lossy(), FsLineReader, enumerator)
        .with_exclusion_list(settings.exclusion_list.clone())
        .with_inclusion_list(settings.inclusion_list.clone());
    tracing::debug!(
        "Building {} (exclusion list: {:?}, inclusion list: {:?})",
        builder.root(),
        builder.exclusion_list(),
        builder.inclusion_list()
    );
    builder.build()
}

fn make_enumerator(source: EnumerationSource, root: &Path) -> Box<dyn FileEnumerator> {
    match source {
        EnumerationSource::Git => Box::new(GitFileLister::new(root)),
        EnumerationSource::Filesystem => Box::new(DirectoryEnumerator::new(root)),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
