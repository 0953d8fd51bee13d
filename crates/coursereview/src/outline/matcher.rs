//! Instructor name matching.
//!
//! Matching is deliberately permissive: a candidate is accepted when every
//! query part appears inside it, or when any one of its own name parts equals
//! a query part. "Smith" therefore matches every Smith on staff. This false
//! positive rate is accepted; callers wanting exact matches filter afterwards.

use regex::Regex;
use std::sync::LazyLock;

/// Leading honorifics, possibly repeated ("Dr. Prof. Smith").
static HONORIFIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:dr\.|prof\.)\s*|professor(?:\s+|$))+").expect("valid honorific regex")
});

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalizes a name: lower-case, commas removed, whitespace collapsed and
/// leading honorifics stripped.
///
/// Normalizing an already normalized name returns it unchanged.
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase().replace(',', " ");
    let collapsed = WHITESPACE_REGEX.replace_all(lowered.trim(), " ");
    HONORIFIC_REGEX.replace(&collapsed, "").trim().to_string()
}

/// Splits a normalized name into parts longer than one character.
fn name_parts(normalized: &str) -> Vec<&str> {
    normalized
        .split(' ')
        .filter(|part| part.chars().count() > 1)
        .collect()
}

/// A normalized instructor query, reusable across many candidates.
#[derive(Debug, Clone)]
pub struct NameQuery {
    parts: Vec<String>,
}

impl NameQuery {
    pub fn new(raw: &str) -> Self {
        let normalized = normalize_name(raw);
        let parts = name_parts(&normalized)
            .into_iter()
            .map(str::to_string)
            .collect();
        Self { parts }
    }

    /// Returns true if the query has nothing to match on (e.g. "Dr. J").
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Tests a candidate instructor name against this query.
    pub fn matches(&self, candidate: &str) -> bool {
        if self.parts.is_empty() {
            return false;
        }

        let normalized = normalize_name(candidate);
        if normalized.is_empty() {
            return false;
        }

        if self.parts.iter().all(|part| normalized.contains(part.as_str())) {
            return true;
        }

        name_parts(&normalized)
            .into_iter()
            .any(|part| self.parts.iter().any(|q| q == part))
    }
}

/// One-shot form of [`NameQuery::matches`].
pub fn name_matches(query: &str, candidate: &str) -> bool {
    NameQuery::new(query).matches(candidate)
}
