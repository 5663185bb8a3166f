//! Runtime setup for the CLI.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::config::{default_settings_path, load_settings, ConfigResolver};
use crate::core::ProjectRef;

/// Log level for a `-v` count; `RUST_LOG` still overrides it
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Initialize `env_logger` once at startup
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .parse_default_env();

    if let Err(e) = builder.try_init() {
        // Already initialized (e.g. in tests)
        eprintln!("Note: Logger already configured: {}", e);
    }
}

/// Settings path from the flag, else the default location
pub fn resolve_settings_path(settings: Option<&Path>) -> Result<PathBuf> {
    settings
        .map(Path::to_path_buf)
        .or_else(default_settings_path)
        .context("No settings location available. Pass --settings <file>.")
}

/// Resolver seeded from the persisted process-wide settings
pub fn build_resolver(settings: Option<&Path>) -> ConfigResolver {
    ConfigResolver::with_configuration(load_settings(settings))
}

/// Project reference for `--project`, canonicalized when possible so the
/// cache key is stable across spellings of the same root
pub fn project_ref(project: Option<&Path>) -> Option<ProjectRef> {
    project.map(|root| {
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        ProjectRef::from_root(&root)
    })
}
