//! Command handlers for the CLI

pub mod classify;
pub mod config;
pub mod init;

pub use classify::{handle_classify_command, ClassifyConfig};
pub use config::{handle_config_set, handle_config_show, ConfigSetArgs};
pub use init::handle_init_command;
