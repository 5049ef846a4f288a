//! Patient names.
//!
//! Whitespace is collapsed on the way in, so two names that differ only in spacing compare
//! equal. `find` matches whole words of a name, ignoring case.

use crate::validation::{normalise_whitespace, only_alphanumeric_or, within_length};
use crate::{ClinicError, ClinicResult};

/// A patient's full name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Names should only contain letters, digits, \
        spaces and the characters ' - . @ , and must not be blank or longer than 100 characters";

    const MAX_LEN: usize = 100;
    const EXTRA_CHARS: [char; 5] = ['\'', '-', '.', '@', ','];

    pub fn parse(input: impl AsRef<str>) -> ClinicResult<Self> {
        let normalised = normalise_whitespace(input.as_ref());
        if !within_length(&normalised, Self::MAX_LEN)
            || !only_alphanumeric_or(&normalised, &Self::EXTRA_CHARS)
        {
            return Err(ClinicError::invalid(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(normalised))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if any whitespace-separated word of the name equals `keyword`,
    /// ignoring case.
    pub fn contains_word_ignore_case(&self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        !keyword.is_empty()
            && self
                .0
                .split_whitespace()
                .any(|word| word.eq_ignore_ascii_case(keyword))
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collapses_whitespace() {
        let name = Name::parse("  Tan   Ah  Kow ").expect("valid name");
        assert_eq!(name.as_str(), "Tan Ah Kow");
    }

    #[test]
    fn test_parse_accepts_common_punctuation() {
        assert!(Name::parse("Mary-Ann O'Neil").is_ok());
        assert!(Name::parse("Dr. Lim, Wei Ming").is_ok());
    }

    #[test]
    fn test_parse_rejects_slash() {
        // `s/` and `d/` would be read as field prefixes on the command line.
        assert!(Name::parse("Ravi s/o Kumar").is_err());
    }

    #[test]
    fn test_parse_rejects_blank_and_symbols() {
        assert!(Name::parse("   ").is_err());
        assert!(Name::parse("John#Doe").is_err());
        assert!(Name::parse("a".repeat(101)).is_err());
    }

    #[test]
    fn test_contains_word_ignore_case() {
        let name = Name::parse("Alice Pauline").expect("valid name");
        assert!(name.contains_word_ignore_case("alice"));
        assert!(name.contains_word_ignore_case("PAULINE"));
        assert!(!name.contains_word_ignore_case("Ali"));
        assert!(!name.contains_word_ignore_case(" "));
    }
}
