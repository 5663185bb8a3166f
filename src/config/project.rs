//! Project-scoped configuration file parsing.
//!
//! The file lives at `<root>/.plugin/get-set-highlighter/config.json`:
//!
//! ```json
//! {
//!   "getterPatterns": ["get*", "is*"],
//!   "setterPatterns": ["set*"],
//!   "enabled": true
//! }
//! ```
//!
//! Parsing is deliberately tolerant: quoted strings are pulled out of each
//! array's bracketed span regardless of formatting, so hand-edited files with
//! trailing commas or comments still load. Missing keys yield empty lists and
//! an unset `enabled`; nothing here fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").expect("valid regex"));
static GETTER_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)"getterPatterns":\[([^\]]*)\]"#).expect("valid regex"));
static SETTER_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)"setterPatterns":\[([^\]]*)\]"#).expect("valid regex"));
static STRING_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("valid regex"));
static ENABLED_FLAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)"enabled":(true|false)"#).expect("valid regex"));

/// Project-level overrides layered on top of the process-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfiguration {
    /// Accessor patterns appended to the process-wide list
    #[serde(default)]
    pub getter_patterns: Vec<String>,

    /// Mutator patterns appended to the process-wide list
    #[serde(default)]
    pub setter_patterns: Vec<String>,

    /// `None` defers to the process-wide value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl ProjectConfiguration {
    pub fn is_empty(&self) -> bool {
        self.getter_patterns.is_empty() && self.setter_patterns.is_empty() && self.enabled.is_none()
    }

    /// Pretty JSON in the on-disk format
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Starter file written by `getsetmap init`
    pub fn template() -> Self {
        Self {
            getter_patterns: vec!["get*".to_string(), "is*".to_string(), "has*".to_string()],
            setter_patterns: vec!["set*".to_string()],
            enabled: Some(true),
        }
    }
}

/// Parse project configuration content.
///
/// Whitespace is removed before matching, so pattern strings cannot contain
/// spaces. Blank entries are dropped.
pub fn parse_project_config(content: &str) -> ProjectConfiguration {
    let cleaned = WHITESPACE.replace_all(content, "");

    ProjectConfiguration {
        getter_patterns: extract_string_array(&GETTER_ARRAY, &cleaned),
        setter_patterns: extract_string_array(&SETTER_ARRAY, &cleaned),
        enabled: ENABLED_FLAG
            .captures(&cleaned)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().eq_ignore_ascii_case("true")),
    }
}

fn extract_string_array(array: &Regex, content: &str) -> Vec<String> {
    let Some(span) = array.captures(content).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };

    STRING_LITERAL
        .captures_iter(span.as_str())
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
