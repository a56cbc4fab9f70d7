use crate::cli::{Cli, ConfigAction, SourceArgs};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::resolve_settings;

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Show(source) => run_config_show(source, cli),
    }
}

fn run_config_show(args: &SourceArgs, cli: &Cli) -> i32 {
    match run_config_show_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the effective settings as a TOML document.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialized.
pub fn run_config_show_impl(args: &SourceArgs, cli: &Cli) -> Result<String> {
    let settings = resolve_settings(args, cli.no_config)?;
    let body = toml::to_string_pretty(&settings.to_config())
        .map_err(|e| crate::ApplyListError::Config(e.to_string()))?;

    let origin = settings.config_file.as_ref().map_or_else(
        || "# source: defaults".to_string(),
        |path| format!("# source: {}", path.display()),
    );
    Ok(format!("{origin}\n{body}"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
