//! National Registration Identity Card number.

use crate::{ClinicError, ClinicResult};

/// A validated NRIC: the unique identity key of a patient.
///
/// Canonical form is upper-case, e.g. `S1234567A`. Lower-case input is accepted and normalised,
/// so two NRICs that differ only in case are the same identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nric(String);

impl Nric {
    pub const MESSAGE_CONSTRAINTS: &'static str = "NRIC should start with S, T, F, G or M, \
        followed by 7 digits and end with a letter, e.g. S1234567A";

    /// Parses and normalises an NRIC.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidInput`] carrying [`Nric::MESSAGE_CONSTRAINTS`] if the
    /// trimmed input is not a well-formed NRIC.
    pub fn parse(input: impl AsRef<str>) -> ClinicResult<Self> {
        let candidate = input.as_ref().trim().to_ascii_uppercase();
        if !Self::is_valid(&candidate) {
            return Err(ClinicError::invalid(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(candidate))
    }

    fn is_valid(candidate: &str) -> bool {
        let bytes = candidate.as_bytes();
        bytes.len() == 9
            && matches!(bytes[0], b'S' | b'T' | b'F' | b'G' | b'M')
            && bytes[1..8].iter().all(u8::is_ascii_digit)
            && bytes[8].is_ascii_uppercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Nric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
