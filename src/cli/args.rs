use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "getsetmap")]
#[command(about = "Accessor and mutator classifier for class members", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv)
    /// -v: Show info messages
    /// -vv: Show debug messages
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify the methods of a structure description
    Classify {
        /// Structure description (JSON)
        structure: PathBuf,

        /// Project root whose configuration file should be merged in
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Process-wide settings file
        #[arg(long, env = "GETSETMAP_SETTINGS")]
        settings: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Inspect or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Write a starter project configuration file
    Init {
        /// Project root (defaults to the current directory)
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as JSON
    Show {
        /// Project root whose configuration file should be merged in
        #[arg(short, long)]
        project: Option<PathBuf>,

        /// Process-wide settings file
        #[arg(long, env = "GETSETMAP_SETTINGS")]
        settings: Option<PathBuf>,
    },

    /// Replace the persisted process-wide settings
    Set {
        /// Accessor patterns (comma-separated)
        #[arg(long)]
        getters: Option<String>,

        /// Mutator patterns (comma-separated)
        #[arg(long)]
        setters: Option<String>,

        /// Enable or disable classification
        #[arg(long)]
        enabled: Option<bool>,

        /// Process-wide settings file
        #[arg(long, env = "GETSETMAP_SETTINGS")]
        settings: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Parse CLI arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}
