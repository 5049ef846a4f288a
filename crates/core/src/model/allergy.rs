//! Allergies and the immutable, order-independent allergy list.

use crate::validation::{normalise_whitespace, only_alphanumeric_or, within_length};
use crate::{ClinicError, ClinicResult};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// A single allergy, e.g. `Peanuts`.
///
/// Allergies order case-insensitively so that display order does not depend on how the operator
/// happened to capitalise them; the original text is the final tie-break to keep the order total.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Allergy(String);

impl Allergy {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Allergies should only contain letters, \
        digits, spaces and hyphens, and must not be blank or longer than 30 characters";

    const MAX_LEN: usize = 30;

    pub fn parse(input: impl AsRef<str>) -> ClinicResult<Self> {
        let normalised = normalise_whitespace(input.as_ref());
        if !within_length(&normalised, Self::MAX_LEN) || !only_alphanumeric_or(&normalised, &['-'])
        {
            return Err(ClinicError::invalid(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(normalised))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for Allergy {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .to_lowercase()
            .cmp(&other.0.to_lowercase())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Allergy {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Allergy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable set of allergies.
///
/// Duplicates collapse on construction and iteration always yields the canonical sorted order,
/// regardless of the order the allergies were supplied in. To change a patient's allergies,
/// build a new list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllergyList {
    allergies: BTreeSet<Allergy>,
}

impl AllergyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.allergies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allergies.is_empty()
    }

    pub fn contains(&self, allergy: &Allergy) -> bool {
        self.allergies.contains(allergy)
    }

    /// Iterates the allergies in canonical display order.
    pub fn iter(&self) -> impl Iterator<Item = &Allergy> {
        self.allergies.iter()
    }

    /// Returns the display list in canonical order.
    pub fn to_vec(&self) -> Vec<Allergy> {
        self.allergies.iter().cloned().collect()
    }
}

impl FromIterator<Allergy> for AllergyList {
    fn from_iter<I: IntoIterator<Item = Allergy>>(iter: I) -> Self {
        Self {
            allergies: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for AllergyList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for allergy in &self.allergies {
            writeln!(f, "{allergy}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allergies(values: &[&str]) -> AllergyList {
        values
            .iter()
            .map(|v| Allergy::parse(v).expect("valid allergy"))
            .collect()
    }

    #[test]
    fn test_duplicates_collapse() {
        let list = allergies(&["peanuts", "peanuts", "shellfish"]);
        let display: Vec<String> = list.iter().map(ToString::to_string).collect();
        assert_eq!(display, vec!["peanuts", "shellfish"]);
    }

    #[test]
    fn test_order_is_independent_of_insertion() {
        let forward = allergies(&["peanuts", "shellfish", "Dust"]);
        let backward = allergies(&["Dust", "shellfish", "peanuts"]);
        assert_eq!(forward, backward);
        assert_eq!(forward.to_vec(), backward.to_vec());
        assert_eq!(forward.to_vec()[0].as_str(), "Dust");
    }

    #[test]
    fn test_display_renders_one_per_line() {
        let list = allergies(&["shellfish", "peanuts"]);
        assert_eq!(list.to_string(), "peanuts\nshellfish\n");
        assert_eq!(AllergyList::new().to_string(), "");
    }

    #[test]
    fn test_parse_rejects_invalid_allergy() {
        assert!(Allergy::parse("").is_err());
        assert!(Allergy::parse("nuts!").is_err());
        assert!(Allergy::parse("x".repeat(31)).is_err());
    }
}
