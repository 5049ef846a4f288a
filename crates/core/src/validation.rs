//! Input validation utilities.
//!
//! Character-class and length checks shared by the value types in [`crate::model`]. Each value
//! type owns its own constraint message; these helpers only answer yes/no.

/// Returns `true` if `value` is non-blank and no longer than `max_len` characters.
pub(crate) fn within_length(value: &str, max_len: usize) -> bool {
    !value.trim().is_empty() && value.chars().count() <= max_len
}

/// Returns `true` if every character is alphanumeric, a space, or one of `extra`.
pub(crate) fn only_alphanumeric_or(value: &str, extra: &[char]) -> bool {
    value
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || extra.contains(&c))
}

/// Trims `value` and collapses internal whitespace runs to a single space.
pub(crate) fn normalise_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_length_rejects_blank_and_long_values() {
        assert!(within_length("abc", 3));
        assert!(!within_length("   ", 3));
        assert!(!within_length("abcd", 3));
    }

    #[test]
    fn test_only_alphanumeric_or_respects_extra_characters() {
        assert!(only_alphanumeric_or("Mary-Ann O'Neil", &['-', '\'']));
        assert!(!only_alphanumeric_or("Mary_Ann", &['-']));
    }

    #[test]
    fn test_normalise_whitespace_collapses_runs() {
        assert_eq!(normalise_whitespace("  John \t  Tan  "), "John Tan");
    }
}
