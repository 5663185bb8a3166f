//! Wildcard naming patterns such as `get*`, `is*` or `*Async`.
//!
//! A pattern is split on `*` into literal segments once, up front, producing an
//! immutable [`CompiledPattern`]. Matching is anchored at both ends and
//! case-insensitive; every character other than `*` is a literal (`.` included).
//!
//! Only the span covered by the first `*` is captured. With more than one `*`
//! the first wildcard is greedy: later literal segments are placed as far right
//! as they can go, so the first capture is as long as possible.

/// Result of applying a compiled pattern to a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternMatch {
    NoMatch,
    /// Pattern has no wildcard and equals the name (ignoring case)
    Exact,
    /// Raw span of the name covered by the first `*`; may be empty
    Captured(String),
}

impl PatternMatch {
    pub fn is_match(&self) -> bool {
        !matches!(self, PatternMatch::NoMatch)
    }

    /// Extracted member-name fragment: non-empty capture with its first
    /// character lower-cased. Exact matches carry nothing to correlate.
    pub fn fragment(&self) -> Option<String> {
        match self {
            PatternMatch::Captured(raw) if !raw.is_empty() => Some(lower_first(raw)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: String,
    /// Literal segments between wildcards; `segments.len() == wildcard count + 1`
    segments: Vec<Vec<char>>,
}

impl CompiledPattern {
    pub fn compile(pattern: &str) -> Self {
        Self {
            source: pattern.to_string(),
            segments: pattern.split('*').map(|s| s.chars().collect()).collect(),
        }
    }

    /// Pattern text this matcher was compiled from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn has_wildcard(&self) -> bool {
        self.segments.len() > 1
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.match_name(name).is_match()
    }

    pub fn match_name(&self, name: &str) -> PatternMatch {
        let chars: Vec<char> = name.chars().collect();

        if !self.has_wildcard() {
            return if segment_eq(&chars, &self.segments[0]) {
                PatternMatch::Exact
            } else {
                PatternMatch::NoMatch
            };
        }

        let prefix = &self.segments[0];
        let suffix = &self.segments[self.segments.len() - 1];
        if chars.len() < prefix.len() + suffix.len() {
            return PatternMatch::NoMatch;
        }

        let tail_start = chars.len() - suffix.len();
        if !segment_eq(&chars[..prefix.len()], prefix) || !segment_eq(&chars[tail_start..], suffix)
        {
            return PatternMatch::NoMatch;
        }

        // Place inner segments right to left, each as far right as possible.
        // The leftmost placement then bounds the first wildcard's capture.
        let inner = &self.segments[1..self.segments.len() - 1];
        let mut right = tail_start;
        for segment in inner.iter().rev() {
            match rfind_segment(&chars[prefix.len()..right], segment) {
                Some(offset) => right = prefix.len() + offset,
                None => return PatternMatch::NoMatch,
            }
        }

        PatternMatch::Captured(chars[prefix.len()..right].iter().collect())
    }

    /// Extracted fragment for `name`, if the pattern matches with a non-empty capture
    pub fn extract(&self, name: &str) -> Option<String> {
        self.match_name(name).fragment()
    }
}

/// Compile `pattern` and extract the normalized fragment from `name`
pub fn match_name(name: &str, pattern: &str) -> Option<String> {
    CompiledPattern::compile(pattern).extract(name)
}

/// Compile a list of pattern strings, preserving order
pub fn compile_all<S: AsRef<str>>(patterns: &[S]) -> Vec<CompiledPattern> {
    patterns
        .iter()
        .map(|p| CompiledPattern::compile(p.as_ref()))
        .collect()
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn segment_eq(haystack: &[char], segment: &[char]) -> bool {
    haystack.len() == segment.len()
        && haystack
            .iter()
            .zip(segment)
            .all(|(a, b)| chars_eq_ignore_case(*a, *b))
}

fn rfind_segment(haystack: &[char], segment: &[char]) -> Option<usize> {
    if segment.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - segment.len())
        .rev()
        .find(|&start| segment_eq(&haystack[start..start + segment.len()], segment))
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
