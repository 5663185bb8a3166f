use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::patterns::{compile_all, CompiledPattern};

/// Process-wide accessor/mutator naming configuration.
///
/// Values are immutable once built; updates replace the whole value
/// (see [`GlobalConfig::replace`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Wildcard patterns identifying accessors, tried in order
    #[serde(default = "default_accessor_patterns")]
    pub accessor_patterns: Vec<String>,

    /// Wildcard patterns identifying mutators, tried in order
    #[serde(default = "default_mutator_patterns")]
    pub mutator_patterns: Vec<String>,

    /// Master switch; when false nothing is classified
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            accessor_patterns: default_accessor_patterns(),
            mutator_patterns: default_mutator_patterns(),
            enabled: default_enabled(),
        }
    }
}

fn default_accessor_patterns() -> Vec<String> {
    vec!["get*".to_string(), "is*".to_string(), "has*".to_string()]
}

fn default_mutator_patterns() -> Vec<String> {
    vec!["set*".to_string()]
}

fn default_enabled() -> bool {
    true
}

impl Configuration {
    pub fn new<A, M>(accessor_patterns: A, mutator_patterns: M, enabled: bool) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        Self {
            accessor_patterns: accessor_patterns.into_iter().map(Into::into).collect(),
            mutator_patterns: mutator_patterns.into_iter().map(Into::into).collect(),
            enabled,
        }
    }
}

/// Configuration actually used for one classification request: process-wide
/// settings merged with any project configuration, patterns pre-compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfiguration {
    accessor_patterns: Vec<CompiledPattern>,
    mutator_patterns: Vec<CompiledPattern>,
    enabled: bool,
}

impl EffectiveConfiguration {
    pub fn new(accessor_patterns: &[String], mutator_patterns: &[String], enabled: bool) -> Self {
        Self {
            accessor_patterns: compile_all(accessor_patterns),
            mutator_patterns: compile_all(mutator_patterns),
            enabled,
        }
    }

    pub fn accessor_patterns(&self) -> &[CompiledPattern] {
        &self.accessor_patterns
    }

    pub fn mutator_patterns(&self) -> &[CompiledPattern] {
        &self.mutator_patterns
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Pattern strings back in [`Configuration`] form, for display
    pub fn to_configuration(&self) -> Configuration {
        Configuration::new(
            self.accessor_patterns.iter().map(|p| p.as_str().to_string()),
            self.mutator_patterns.iter().map(|p| p.as_str().to_string()),
            self.enabled,
        )
    }
}

impl From<&Configuration> for EffectiveConfiguration {
    fn from(config: &Configuration) -> Self {
        Self::new(
            &config.accessor_patterns,
            &config.mutator_patterns,
            config.enabled,
        )
    }
}

/// Holder for the current process-wide [`Configuration`].
///
/// Readers get an `Arc` snapshot; writers swap in a new value. The lock is
/// only held long enough to clone or replace the `Arc`.
#[derive(Debug, Clone, Default)]
pub struct GlobalConfig {
    current: Arc<RwLock<Arc<Configuration>>>,
}

impl GlobalConfig {
    pub fn new(config: Configuration) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(config))),
        }
    }

    pub fn snapshot(&self) -> Arc<Configuration> {
        Arc::clone(&self.current.read())
    }

    pub fn replace(&self, config: Configuration) {
        *self.current.write() = Arc::new(config);
    }
}
