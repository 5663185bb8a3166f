//! Naming-convention variants of a member-name fragment.
//!
//! `cacheKey`, `cache_key` and friends are treated as the same member when
//! checking whether a structure declares what an accessor/mutator exposes.

use std::collections::BTreeSet;

/// All spellings of `fragment` that should be considered equivalent:
/// the fragment itself, its snake_case form and its camelCase form.
pub fn name_variants(fragment: &str) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    variants.insert(fragment.to_string());
    variants.insert(camel_to_snake(fragment));
    variants.insert(snake_to_camel(fragment));
    variants
}

/// `cacheKey` -> `cache_key`
pub fn camel_to_snake(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = c.is_lowercase();
        out.push(c);
    }
    out.to_lowercase()
}

/// `cache_key` -> `cacheKey`. Strings without `_` are returned unchanged.
pub fn snake_to_camel(s: &str) -> String {
    if !s.contains('_') {
        return s.to_string();
    }

    let mut parts = s.split('_');
    let mut out = parts.next().unwrap_or_default().to_lowercase();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
