//! CLI module for getsetmap
//!
//! This module provides the command-line interface, including:
//! - Argument parsing (`args`)
//! - Command handlers (`commands`)
//! - Logging and configuration setup (`setup`)

pub mod args;
pub mod commands;
pub mod setup;

pub use args::{Cli, Commands, ConfigAction, OutputFormat};
pub use commands::{
    handle_classify_command, handle_config_set, handle_config_show, handle_init_command,
    ClassifyConfig, ConfigSetArgs,
};
pub use setup::init_logging;

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
