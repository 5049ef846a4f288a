//! Recorded sex of a patient, stored as a one-letter code.

use crate::{ClinicError, ClinicResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Sex should be either M or F";

    pub fn parse(input: impl AsRef<str>) -> ClinicResult<Self> {
        match input.as_ref().trim().to_ascii_uppercase().as_str() {
            "M" | "MALE" => Ok(Sex::Male),
            "F" | "FEMALE" => Ok(Sex::Female),
            _ => Err(ClinicError::invalid(Self::MESSAGE_CONSTRAINTS)),
        }
    }

    /// Single-letter code, as typed by the operator and as stored.
    pub fn code(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
