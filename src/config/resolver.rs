//! Two-tier configuration resolution.
//!
//! ## Precedence (highest to lowest)
//!
//! 1. Project config file (`<root>/.plugin/get-set-highlighter/config.json`):
//!    patterns are appended, `enabled` overrides when set
//! 2. Persisted process-wide settings
//! 3. Built-in defaults
//!
//! Pattern lists are merged as an order-preserving union: process-wide
//! patterns first, then project patterns not already present.

use std::collections::HashSet;
use std::sync::Arc;

use super::core::{Configuration, EffectiveConfiguration, GlobalConfig};
use super::project::ProjectConfiguration;
use crate::cache::ProjectConfigStore;
use crate::core::ProjectRef;

/// Merge process-wide and project configuration
pub fn merge(global: &Configuration, project: &ProjectConfiguration) -> EffectiveConfiguration {
    EffectiveConfiguration::new(
        &dedupe_concat(&global.accessor_patterns, &project.getter_patterns),
        &dedupe_concat(&global.mutator_patterns, &project.setter_patterns),
        project.enabled.unwrap_or(global.enabled),
    )
}

/// `first ++ second` with exact-string duplicates removed, first occurrence kept
fn dedupe_concat(first: &[String], second: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    first
        .iter()
        .chain(second)
        .filter(|pattern| seen.insert(pattern.as_str()))
        .cloned()
        .collect()
}

/// Resolve the effective configuration for an optional project
pub fn resolve(
    global: &Configuration,
    project: Option<&ProjectRef>,
    store: &ProjectConfigStore,
) -> EffectiveConfiguration {
    let Some(project) = project else {
        return EffectiveConfiguration::from(global);
    };

    match store.get_project(project) {
        Some(project_config) => merge(global, &project_config),
        None => EffectiveConfiguration::from(global),
    }
}

/// Resolver bundling the process-wide configuration holder with the project cache
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    global: GlobalConfig,
    store: Arc<ProjectConfigStore>,
}

impl ConfigResolver {
    pub fn new(global: GlobalConfig, store: Arc<ProjectConfigStore>) -> Self {
        Self { global, store }
    }

    pub fn with_configuration(config: Configuration) -> Self {
        Self::new(GlobalConfig::new(config), Arc::new(ProjectConfigStore::new()))
    }

    /// Effective configuration against the current process-wide snapshot
    pub fn effective(&self, project: Option<&ProjectRef>) -> EffectiveConfiguration {
        resolve(&self.global.snapshot(), project, &self.store)
    }

    pub fn global(&self) -> &GlobalConfig {
        &self.global
    }

    pub fn store(&self) -> &ProjectConfigStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn write_project_config(root: &std::path::Path, content: &str) -> ProjectRef {
        let project = ProjectRef::from_root(root);
        fs::create_dir_all(project.config_path.parent().unwrap()).unwrap();
        fs::write(&project.config_path, content).unwrap();
        project
    }

    #[test]
    fn test_merge_dedupes_preserving_order() {
        let global = Configuration::new(["get*"], ["set*"], true);
        let project = ProjectConfiguration {
            getter_patterns: strings(&["get*", "is*"]),
            setter_patterns: strings(&["with*", "set*"]),
            enabled: None,
        };

        let merged = merge(&global, &project).to_configuration();

        assert_eq!(merged.accessor_patterns, strings(&["get*", "is*"]));
        assert_eq!(merged.mutator_patterns, strings(&["set*", "with*"]));
        assert!(merged.enabled);
    }

    #[test]
    fn test_merge_dedupe_is_exact_string() {
        let global = Configuration::new(["get*"], Vec::<String>::new(), true);
        let project = ProjectConfiguration {
            getter_patterns: strings(&["GET*", "get*"]),
            ..Default::default()
        };

        assert_eq!(
            merge(&global, &project).to_configuration().accessor_patterns,
            strings(&["get*", "GET*"])
        );
    }

    #[test]
    fn test_merge_project_enabled_overrides_global() {
        let global = Configuration::new(["get*"], ["set*"], true);
        let project = ProjectConfiguration {
            enabled: Some(false),
            ..Default::default()
        };
        assert!(!merge(&global, &project).enabled());

        let global = Configuration::new(["get*"], ["set*"], false);
        let project = ProjectConfiguration {
            enabled: Some(true),
            ..Default::default()
        };
        assert!(merge(&global, &project).enabled());
    }

    #[test]
    fn test_resolve_without_project_returns_global() {
        let global = Configuration::default();
        let store = ProjectConfigStore::new();

        let effective = resolve(&global, None, &store);

        assert_eq!(effective.to_configuration(), global);
        assert!(store.is_empty());
    }

    #[test]
    fn test_resolve_missing_project_file_returns_global() {
        let temp_dir = TempDir::new().unwrap();
        let global = Configuration::new(["get*"], ["set*"], true);
        let store = ProjectConfigStore::new();
        let project = ProjectRef::from_root(temp_dir.path());

        assert_eq!(
            resolve(&global, Some(&project), &store).to_configuration(),
            global
        );
    }

    #[test]
    fn test_resolve_merges_project_file() {
        let temp_dir = TempDir::new().unwrap();
        let project = write_project_config(
            temp_dir.path(),
            r#"{ "getterPatterns": ["get*", "is*"], "enabled": false }"#,
        );
        let global = Configuration::new(["get*"], ["set*"], true);
        let store = ProjectConfigStore::new();

        let effective = resolve(&global, Some(&project), &store).to_configuration();

        assert_eq!(effective.accessor_patterns, strings(&["get*", "is*"]));
        assert_eq!(effective.mutator_patterns, strings(&["set*"]));
        assert!(!effective.enabled);
    }

    #[test]
    fn test_config_resolver_tracks_global_replacement() {
        let temp_dir = TempDir::new().unwrap();
        let project = write_project_config(temp_dir.path(), r#"{ "getterPatterns": ["is*"] }"#);
        let resolver = ConfigResolver::with_configuration(Configuration::new(
            ["get*"],
            ["set*"],
            true,
        ));

        assert_eq!(
            resolver
                .effective(Some(&project))
                .to_configuration()
                .accessor_patterns,
            strings(&["get*", "is*"])
        );

        resolver
            .global()
            .replace(Configuration::new(["fetch*"], ["set*"], true));

        assert_eq!(
            resolver
                .effective(Some(&project))
                .to_configuration()
                .accessor_patterns,
            strings(&["fetch*", "is*"])
        );
        assert_eq!(resolver.store().stats().hits, 1);
    }
}
