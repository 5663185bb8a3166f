use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::Configuration;
use super::settings::PersistedSettings;
use crate::errors::{ConfigError, Result};

/// Environment variable overriding the settings file location
pub const SETTINGS_PATH_ENV: &str = "GETSETMAP_SETTINGS";

const SETTINGS_DIR_NAME: &str = "getsetmap";
const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Pure function to read settings file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse persisted settings from a TOML string
pub fn parse_settings(contents: &str) -> Result<Configuration> {
    let persisted = toml::from_str::<PersistedSettings>(contents)?;
    Ok(Configuration::from(persisted))
}

/// Try loading settings from a specific path; `None` if missing or invalid
pub(crate) fn try_load_settings_from_path(path: &Path) -> Option<Configuration> {
    let contents = match read_config_file(path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(path, &e);
            return None;
        }
    };

    match parse_settings(&contents) {
        Ok(config) => {
            log::debug!("Loaded settings from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} in {}. Using defaults.", e, path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!("Failed to read settings file {}: {}", path.display(), error);
    }
}

/// Default settings location: `$GETSETMAP_SETTINGS`, else
/// `<config_dir>/getsetmap/settings.toml`
pub fn default_settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(SETTINGS_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Load process-wide settings, falling back to defaults on any failure
pub fn load_settings(path: Option<&Path>) -> Configuration {
    let path = match path.map(Path::to_path_buf).or_else(default_settings_path) {
        Some(path) => path,
        None => {
            log::debug!("No settings location available. Using default configuration.");
            return Configuration::default();
        }
    };

    try_load_settings_from_path(&path).unwrap_or_else(|| {
        log::debug!(
            "No usable settings at {}. Using default configuration.",
            path.display()
        );
        Configuration::default()
    })
}

/// Persist `config`, replacing any existing settings file
pub fn save_settings(path: &Path, config: &Configuration) -> Result<()> {
    let contents = toml::to_string_pretty(&config.to_persisted())?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| ConfigError::io(path, e))?;
    log::info!("Saved settings to {}", path.display());
    Ok(())
}
