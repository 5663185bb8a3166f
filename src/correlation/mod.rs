//! Member-existence correlation.
//!
//! Given a fragment extracted from a method name, decide whether the enclosing
//! structure declares (or documents) a member with that name under any of the
//! accepted naming conventions.

pub mod doc_properties;

pub use doc_properties::extract_documented_properties;

use crate::core::{Member, MemberKind};
use crate::patterns::name_variants;
use std::collections::BTreeSet;

/// Sigil characters hosts may leave on member names (`$name`, `@name`, `&name`)
const MEMBER_SIGILS: &[char] = &['$', '@', '&'];

/// The member a fragment correlated to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelatedMember {
    /// Member name with sigils stripped
    pub name: String,
    pub kind: MemberKind,
}

/// True if any declared member or documented name matches `fragment`
pub fn member_exists(members: &[Member], documented: &[String], fragment: &str) -> bool {
    find_member(members, documented, fragment).is_some()
}

/// Locate the member `fragment` refers to.
///
/// Declared members are checked before documented names; either is enough.
pub fn find_member(
    members: &[Member],
    documented: &[String],
    fragment: &str,
) -> Option<CorrelatedMember> {
    if fragment.trim().is_empty() {
        return None;
    }

    let variants: BTreeSet<String> = name_variants(fragment)
        .into_iter()
        .map(|v| v.to_lowercase())
        .collect();

    let declared = members.iter().find_map(|member| {
        let clean = strip_sigils(&member.name);
        variants
            .contains(&clean.to_lowercase())
            .then(|| CorrelatedMember {
                name: clean.to_string(),
                kind: member.kind,
            })
    });

    declared.or_else(|| {
        documented
            .iter()
            .find(|name| variants.contains(&name.to_lowercase()))
            .map(|name| CorrelatedMember {
                name: name.clone(),
                kind: MemberKind::DocumentedProperty,
            })
    })
}

pub fn strip_sigils(name: &str) -> &str {
    name.trim_start_matches(MEMBER_SIGILS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(names: &[&str]) -> Vec<Member> {
        names.iter().map(|n| Member::field(*n)).collect()
    }

    #[test]
    fn test_exact_field_match() {
        assert!(member_exists(&fields(&["cacheKey"]), &[], "cacheKey"));
    }

    #[test]
    fn test_snake_case_field_matches_camel_fragment() {
        assert!(member_exists(&fields(&["cache_key"]), &[], "cacheKey"));
    }

    #[test]
    fn test_camel_field_matches_snake_fragment() {
        assert!(member_exists(&fields(&["cacheKey"]), &[], "cache_key"));
    }

    #[test]
    fn test_comparison_ignores_case() {
        assert!(member_exists(&fields(&["CACHEKEY"]), &[], "cacheKey"));
    }

    #[test]
    fn test_sigils_are_stripped_from_declared_members() {
        assert!(member_exists(&fields(&["$cache_key"]), &[], "cacheKey"));
        assert!(member_exists(&fields(&["@name"]), &[], "name"));
    }

    #[test]
    fn test_documented_names_match() {
        let documented = vec!["cache_key".to_string()];
        let found = find_member(&[], &documented, "cacheKey").unwrap();
        assert_eq!(found.name, "cache_key");
        assert_eq!(found.kind, MemberKind::DocumentedProperty);
    }

    #[test]
    fn test_documented_names_are_not_sigil_stripped() {
        let documented = vec!["$name".to_string()];
        assert!(!member_exists(&[], &documented, "name"));
    }

    #[test]
    fn test_blank_fragment_never_matches() {
        let members = fields(&["", " "]);
        assert!(!member_exists(&members, &[], ""));
        assert!(!member_exists(&members, &[], "   "));
    }

    #[test]
    fn test_missing_member() {
        assert!(!member_exists(&fields(&["key"]), &["value".to_string()], "cacheKey"));
    }

    #[test]
    fn test_find_member_reports_clean_field_name() {
        let found = find_member(&fields(&["$cache_key"]), &[], "cacheKey").unwrap();
        assert_eq!(
            found,
            CorrelatedMember {
                name: "cache_key".to_string(),
                kind: MemberKind::Field,
            }
        );
    }
}
