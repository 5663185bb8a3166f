//! Accessor/mutator classification of method names.
//!
//! # Detection Strategy
//!
//! 1. Bail out with [`MethodRole::None`] when the configuration is disabled
//! 2. Try each accessor pattern in order: extract the wildcard fragment and
//!    check the structure declares or documents a matching member
//! 3. If no accessor pattern correlates, do the same with mutator patterns
//! 4. Otherwise the method is neither
//!
//! A pattern that matches the name but whose fragment has no matching member
//! does not end the search. With `["getCache*", "get*"]` and a `cacheKey`
//! field, `getCacheKey` fails on `getCache*` (no `key` member) and then
//! succeeds on `get*`.
//!
//! Classification is a pure function of its inputs: no caching, no I/O, no
//! shared state, so it can run on any number of analysis threads at once.

use rayon::prelude::*;

use crate::config::EffectiveConfiguration;
use crate::core::{Member, MethodRole, MethodVerdict, Structure, Verdict};
use crate::correlation::member_exists;
use crate::patterns::CompiledPattern;

/// Classify a single method name against a structure's members
pub fn classify(
    member_name: &str,
    declared: &[Member],
    documented: &[String],
    config: &EffectiveConfiguration,
) -> Verdict {
    if !config.enabled() {
        return Verdict::none();
    }

    if let Some(fragment) =
        first_correlated(member_name, config.accessor_patterns(), declared, documented)
    {
        return Verdict::accessor(fragment);
    }

    if let Some(fragment) =
        first_correlated(member_name, config.mutator_patterns(), declared, documented)
    {
        return Verdict::mutator(fragment);
    }

    Verdict::none()
}

/// First fragment, in pattern order, that both matches and correlates
fn first_correlated(
    member_name: &str,
    patterns: &[CompiledPattern],
    declared: &[Member],
    documented: &[String],
) -> Option<String> {
    patterns
        .iter()
        .filter_map(|pattern| pattern.extract(member_name))
        .find(|fragment| member_exists(declared, documented, fragment))
}

/// Classify every method of `structure` in parallel; output order matches
/// `structure.methods`.
pub fn classify_structure(
    structure: &Structure,
    config: &EffectiveConfiguration,
) -> Vec<MethodVerdict> {
    let declared = structure.members();
    let documented = structure.documented_names();

    let verdicts: Vec<MethodVerdict> = structure
        .methods
        .par_iter()
        .map(|method| MethodVerdict {
            method: method.clone(),
            verdict: classify(method, &declared, &documented, config),
        })
        .collect();

    log::debug!(
        "Classified {} methods of {}: {} accessors, {} mutators",
        verdicts.len(),
        structure.name,
        count_role(&verdicts, MethodRole::Accessor),
        count_role(&verdicts, MethodRole::Mutator)
    );

    verdicts
}

fn count_role(verdicts: &[MethodVerdict], role: MethodRole) -> usize {
    verdicts.iter().filter(|v| v.verdict.kind == role).count()
}
