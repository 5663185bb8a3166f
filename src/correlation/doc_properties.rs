//! Extraction of documentation-only properties from doc comment text.
//!
//! Recognizes PHPDoc-style tags:
//!
//! ```text
//! @property string $name
//! @property-read int $id
//! @property-write array<string, int> $counts
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static PROPERTY_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)@property(?:-read|-write)?\s+[^$\n]*?\$([A-Za-z_][A-Za-z0-9_]*)")
        .expect("property tag regex is valid")
});

/// Names of all `@property` tags in `doc_text`, without the `$` sigil,
/// in order of appearance.
pub fn extract_documented_properties(doc_text: &str) -> Vec<String> {
    PROPERTY_TAG
        .captures_iter(doc_text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
