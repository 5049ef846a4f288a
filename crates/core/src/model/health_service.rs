//! The services a clinic appointment can be booked for.

use crate::{ClinicError, ClinicResult};

/// Closed set of services an appointment can be booked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HealthService {
    Consult,
    BloodTest,
    CancerScreening,
    Vaccination,
}

impl HealthService {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Health service should be one of: CONSULT, BLOOD TEST, CANCER SCREENING, VACCINATION";

    pub const ALL: [HealthService; 4] = [
        HealthService::Consult,
        HealthService::BloodTest,
        HealthService::CancerScreening,
        HealthService::Vaccination,
    ];

    /// Parses a service name case-insensitively.
    ///
    /// Spaces, hyphens and underscores between words are interchangeable and may be omitted, so
    /// `blood test`, `BLOOD_TEST` and `BloodTest` all name [`HealthService::BloodTest`].
    pub fn parse(input: impl AsRef<str>) -> ClinicResult<Self> {
        let key: String = input
            .as_ref()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_uppercase();

        match key.as_str() {
            "CONSULT" => Ok(HealthService::Consult),
            "BLOODTEST" => Ok(HealthService::BloodTest),
            "CANCERSCREENING" => Ok(HealthService::CancerScreening),
            "VACCINATION" => Ok(HealthService::Vaccination),
            _ => Err(ClinicError::invalid(Self::MESSAGE_CONSTRAINTS)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthService::Consult => "CONSULT",
            HealthService::BloodTest => "BLOOD TEST",
            HealthService::CancerScreening => "CANCER SCREENING",
            HealthService::Vaccination => "VACCINATION",
        }
    }
}

impl std::fmt::Display for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
