use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::EnumerationSource;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "apply-list")]
#[command(author, version, about = "Select the manifest files an apply run should process")]
#[command(long_about = "Lists the .json and .yaml files of a repository that a downstream \
    apply step should process, honouring an exclusion list and an optional inclusion list.\n\n\
    Exit codes:\n  \
    0 - Lists computed\n  \
    1 - A list file could not be read or the repository could not be enumerated\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the apply list
    Build(BuildArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Default)]
pub struct SourceArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Repository root (overrides config; defaults to the current directory)
    #[arg(long, short = 'r', env = "APPLY_LIST_REPO_PATH", value_parser = path_value)]
    pub repo: Option<PathBuf>,

    /// File listing paths to exclude, one per line (empty to ignore the configured one)
    #[arg(
        long,
        visible_alias = "blacklist",
        env = "APPLY_LIST_EXCLUSION_LIST",
        value_parser = path_value
    )]
    pub exclusion_list: Option<PathBuf>,

    /// File listing the only paths to include, one per line (empty to ignore the configured one)
    #[arg(
        long,
        visible_alias = "whitelist",
        env = "APPLY_LIST_INCLUSION_LIST",
        value_parser = path_value
    )]
    pub inclusion_list: Option<PathBuf>,

    /// Where the file list comes from [possible values: git, filesystem]
    #[arg(long)]
    pub source: Option<EnumerationSource>,
}

/// Accepts empty values, which clap's own path parser rejects.
fn path_value(value: &str) -> Result<PathBuf, Infallible> {
    Ok(PathBuf::from(value))
}

#[derive(Parser, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".apply-list.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Display the effective configuration after applying CLI overrides
    Show(SourceArgs),
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
