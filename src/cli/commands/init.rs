use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::ProjectConfiguration;
use crate::core::project_config_path;
use crate::errors::ConfigError;

pub fn handle_init_command(project: Option<PathBuf>, force: bool) -> Result<()> {
    let root = project.unwrap_or_else(|| PathBuf::from("."));
    let path = write_template(&root, force)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Write the starter project configuration under `root`, returning its path
pub fn write_template(root: &Path, force: bool) -> Result<PathBuf> {
    let path = project_config_path(root);

    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path).into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| ConfigError::io(parent, e))
            .context("Failed to create project configuration directory")?;
    }

    let contents = ProjectConfiguration::template()
        .to_json()
        .map_err(ConfigError::from)?;
    fs::write(&path, contents + "\n").map_err(|e| ConfigError::io(&path, e))?;
    log::info!("Wrote project configuration template to {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_project_config;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_write_template_round_trips_through_parser() {
        let temp_dir = TempDir::new().unwrap();

        let path = write_template(temp_dir.path(), false).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(parse_project_config(&written), ProjectConfiguration::template());
    }

    #[test]
    fn test_write_template_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        write_template(temp_dir.path(), false).unwrap();

        let err = write_template(temp_dir.path(), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_write_template_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = project_config_path(temp_dir.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{}").unwrap();

        write_template(temp_dir.path(), true).unwrap();

        assert_eq!(
            parse_project_config(&fs::read_to_string(&path).unwrap()),
            ProjectConfiguration::template()
        );
    }
}
