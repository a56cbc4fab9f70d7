pub mod build;
pub mod config;
pub mod context;
pub mod init;

pub use build::{build_lists, exit_code_for, run_build, run_build_impl};
pub use config::{run_config, run_config_show_impl};
pub use context::{Settings, merge_settings, resolve_settings};
pub use init::{generate_config_template, run_init, run_init_impl};
