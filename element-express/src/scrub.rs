//! Transcript redaction.
//!
//! Replaces the values of sensitive leaf elements with `[FILTERED]` so a
//! request/response transcript can be logged or stored. Tags, other values
//! and layout are left untouched, and scrubbing is idempotent.

use std::sync::LazyLock;

use regex::Regex;

/// Replacement written in place of a sensitive value.
pub const FILTERED: &str = "[FILTERED]";

/// Replacement pattern keeping the captured opening and closing tags.
const REPLACEMENT: &str = "${1}[FILTERED]${2}";

/// Elements whose values are always redacted.
pub const SENSITIVE_ELEMENTS: &[&str] = &[
    "AccountToken",
    "CardNumber",
    "CVV",
    "AccountNumber",
    "RoutingNumber",
];

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SENSITIVE_ELEMENTS
        .iter()
        .map(|name| {
            Regex::new(&format!("(?is)(<{name}>).*?(</{name}>)")).expect("valid scrub pattern")
        })
        .collect()
});

/// Redacts every sensitive element value in `transcript`.
///
/// Matching is case-insensitive, spans line breaks and stops at the first
/// closing tag, so neighbouring elements are never consumed.
#[must_use]
pub fn scrub(transcript: &str) -> String {
    PATTERNS
        .iter()
        .fold(transcript.to_owned(), |acc, pattern| {
            pattern
                .replace_all(&acc, REPLACEMENT)
                .into_owned()
        })
}
