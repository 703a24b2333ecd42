//! Field formatting helpers.
//!
//! Pure functions used by the request builder to render values the way the
//! provider expects them.

use std::borrow::Cow;

use rand::RngExt;
use rand::rng;

/// Maximum length of a reference number accepted by the provider.
pub const MAX_REFERENCE_LENGTH: usize = 50;

/// Renders an amount in minor units as a decimal string with two fraction
/// digits (`100` becomes `"1.00"`).
#[must_use]
pub fn amount(minor: u64) -> String {
    format!("{}.{:02}", minor / 100, minor % 100)
}

/// Renders the last two digits of a month or year, zero-padded.
#[must_use]
pub fn two_digits(value: u32) -> String {
    format!("{:02}", value % 100)
}

/// Truncates `value` to at most `max` characters.
#[must_use]
pub fn truncate(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Upper-cases the first character and lower-cases the rest.
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Generates a fresh 40 character hexadecimal reference.
#[must_use]
pub fn random_reference() -> String {
    let bytes: [u8; 20] = rng().random();
    hex::encode(bytes)
}

/// Returns the caller reference truncated to [`MAX_REFERENCE_LENGTH`], or a
/// fresh random one when the caller did not supply a non-blank value.
#[must_use]
pub fn reference_number(supplied: Option<&str>) -> Cow<'_, str> {
    match supplied.filter(|value| !value.trim().is_empty()) {
        Some(value) => Cow::Borrowed(truncate(value, MAX_REFERENCE_LENGTH)),
        None => Cow::Owned(random_reference()),
    }
}

/// Masks all but the last four characters of a sensitive number.
#[must_use]
pub fn mask(value: &str) -> String {
    let len = value.chars().count();
    let visible = len.saturating_sub(4);
    value
        .chars()
        .enumerate()
        .map(|(idx, c)| if idx < visible { '*' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_renders_two_fraction_digits() {
        assert_eq!(amount(100), "1.00");
        assert_eq!(amount(0), "0.00");
        assert_eq!(amount(5), "0.05");
        assert_eq!(amount(123_456), "1234.56");
    }

    #[test]
    fn test_two_digits() {
        assert_eq!(two_digits(3), "03");
        assert_eq!(two_digits(12), "12");
        assert_eq!(two_digits(2029), "29");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("abc", 50), "abc");
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("ééé", 2), "éé");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("checking"), "Checking");
        assert_eq!(title_case("SAVINGS"), "Savings");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_random_reference_is_fresh_hex() {
        let first = random_reference();
        let second = random_reference();
        assert_eq!(first.len(), 40);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, second);
    }

    #[test]
    fn test_reference_number_truncates_to_fifty() {
        let long = "x".repeat(75);
        assert_eq!(reference_number(Some(&long)).len(), MAX_REFERENCE_LENGTH);
        assert_eq!(reference_number(Some("order-1")), "order-1");
    }

    #[test]
    fn test_reference_number_replaces_blank_values() {
        assert_eq!(reference_number(None).len(), 40);
        assert_eq!(reference_number(Some("  ")).len(), 40);
    }

    #[test]
    fn test_mask_keeps_last_four() {
        assert_eq!(mask("4000100011112224"), "************2224");
        assert_eq!(mask("123"), "123");
    }
}
