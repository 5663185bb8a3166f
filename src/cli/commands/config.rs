use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::setup::{build_resolver, project_ref, resolve_settings_path};
use crate::config::{load_settings, save_settings, split_patterns, Configuration};

pub fn handle_config_show(project: Option<PathBuf>, settings: Option<PathBuf>) -> Result<()> {
    let resolver = build_resolver(settings.as_deref());
    let project = project_ref(project.as_deref());
    let effective = resolver.effective(project.as_ref()).to_configuration();

    println!("{}", serde_json::to_string_pretty(&effective)?);
    Ok(())
}

pub struct ConfigSetArgs {
    pub getters: Option<String>,
    pub setters: Option<String>,
    pub enabled: Option<bool>,
    pub settings: Option<PathBuf>,
}

pub fn handle_config_set(args: ConfigSetArgs) -> Result<()> {
    let path = resolve_settings_path(args.settings.as_deref())?;
    let current = load_settings(Some(&path));
    let updated = apply_updates(current, &args);

    save_settings(&path, &updated)
        .with_context(|| format!("Failed to save settings to {}", path.display()))?;
    println!("Updated settings in {}", path.display());
    Ok(())
}

/// Flags left out keep their current value; the result replaces the
/// persisted settings as a whole
pub fn apply_updates(current: Configuration, args: &ConfigSetArgs) -> Configuration {
    Configuration {
        accessor_patterns: args
            .getters
            .as_deref()
            .map(split_patterns)
            .unwrap_or(current.accessor_patterns),
        mutator_patterns: args
            .setters
            .as_deref()
            .map(split_patterns)
            .unwrap_or(current.mutator_patterns),
        enabled: args.enabled.unwrap_or(current.enabled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn no_updates() -> ConfigSetArgs {
        ConfigSetArgs {
            getters: None,
            setters: None,
            enabled: None,
            settings: None,
        }
    }

    #[test]
    fn test_apply_updates_keeps_unspecified_values() {
        let current = Configuration::new(["get*"], ["set*"], true);
        let updated = apply_updates(
            current.clone(),
            &ConfigSetArgs {
                enabled: Some(false),
                ..no_updates()
            },
        );
        assert_eq!(updated, Configuration::new(["get*"], ["set*"], false));
    }

    #[test]
    fn test_apply_updates_splits_pattern_lists() {
        let updated = apply_updates(
            Configuration::default(),
            &ConfigSetArgs {
                getters: Some("fetch*, is*".to_string()),
                setters: Some("with*".to_string()),
                ..no_updates()
            },
        );
        assert_eq!(updated.accessor_patterns, vec!["fetch*", "is*"]);
        assert_eq!(updated.mutator_patterns, vec!["with*"]);
        assert!(updated.enabled);
    }

    #[test]
    fn test_config_set_writes_settings_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.toml");

        handle_config_set(ConfigSetArgs {
            getters: Some("read*".to_string()),
            settings: Some(path.clone()),
            ..no_updates()
        })
        .unwrap();

        let saved = load_settings(Some(&path));
        assert_eq!(saved.accessor_patterns, vec!["read*"]);
        assert_eq!(saved.mutator_patterns, Configuration::default().mutator_patterns);
    }
}
