//! Contact phone numbers.

use crate::{ClinicError, ClinicResult};

/// A local eight-digit phone number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should be 8 digits long and start with 6, 8 or 9";

    pub fn parse(input: impl AsRef<str>) -> ClinicResult<Self> {
        let candidate = input.as_ref().trim();
        let valid = candidate.len() == 8
            && candidate.bytes().all(|b| b.is_ascii_digit())
            && matches!(candidate.as_bytes()[0], b'6' | b'8' | b'9');
        if !valid {
            return Err(ClinicError::invalid(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
