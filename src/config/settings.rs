//! Persisted form of the process-wide configuration.
//!
//! Hosts store the pattern lists as comma-joined strings plus a boolean. On
//! read the strings are split on `,`, trimmed, and blank entries dropped.

use serde::{Deserialize, Serialize};

use super::core::Configuration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSettings {
    /// Comma-joined accessor patterns, e.g. `"get*,is*,has*"`
    #[serde(default = "default_getter_patterns")]
    pub getter_patterns: String,

    /// Comma-joined mutator patterns, e.g. `"set*"`
    #[serde(default = "default_setter_patterns")]
    pub setter_patterns: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_getter_patterns() -> String {
    Configuration::default().accessor_patterns.join(",")
}

fn default_setter_patterns() -> String {
    Configuration::default().mutator_patterns.join(",")
}

fn default_enabled() -> bool {
    true
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Configuration::default().to_persisted()
    }
}

/// Split a comma-joined pattern list
pub fn split_patterns(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Configuration {
    pub fn to_persisted(&self) -> PersistedSettings {
        PersistedSettings {
            getter_patterns: self.accessor_patterns.join(","),
            setter_patterns: self.mutator_patterns.join(","),
            enabled: self.enabled,
        }
    }

    pub fn from_persisted(settings: &PersistedSettings) -> Self {
        Self {
            accessor_patterns: split_patterns(&settings.getter_patterns),
            mutator_patterns: split_patterns(&settings.setter_patterns),
            enabled: settings.enabled,
        }
    }
}

impl From<PersistedSettings> for Configuration {
    fn from(settings: PersistedSettings) -> Self {
        Configuration::from_persisted(&settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_patterns_trims_and_drops_blanks() {
        assert_eq!(split_patterns(" get* , ,is*,"), vec!["get*", "is*"]);
        assert!(split_patterns("").is_empty());
        assert!(split_patterns("  ").is_empty());
    }

    #[test]
    fn test_persisted_round_trip() {
        let config = Configuration::new(["get*", "is*"], ["set*"], false);
        let persisted = config.to_persisted();

        assert_eq!(persisted.getter_patterns, "get*,is*");
        assert_eq!(persisted.setter_patterns, "set*");
        assert_eq!(Configuration::from(persisted), config);
    }

    #[test]
    fn test_default_persisted_settings_match_default_configuration() {
        let persisted = PersistedSettings::default();
        assert_eq!(persisted.getter_patterns, "get*,is*,has*");
        assert_eq!(Configuration::from(persisted), Configuration::default());
    }

    #[test]
    fn test_blank_persisted_list_disables_role() {
        let settings = PersistedSettings {
            getter_patterns: "get*".to_string(),
            setter_patterns: String::new(),
            enabled: true,
        };
        assert!(Configuration::from_persisted(&settings)
            .mutator_patterns
            .is_empty());
    }
}
