//! Roster file wire model and translation helpers.
//!
//! Responsibilities:
//! - Define a strict wire model for serialisation/deserialisation
//! - Translate between `clinic-core` domain types and the wire model
//! - Load and save the roster file
//!
//! Layout on disk:
//!
//! ```yaml
//! patients:
//!   - nric: S1234567A
//!     name: Alice Pauline
//!     sex: F
//!     birthdate: 1990-01-15
//!     phone: '91234567'
//!     allergies:
//!       - peanuts
//!     appointments:
//!       - dateTime: 2024-09-01 10:00
//!         healthService: VACCINATION
//! ```

use crate::{StorageError, StorageResult};
use chrono::NaiveDate;
use clinic_core::constants::{APPT_DATE_TIME_FORMAT, DATE_FORMAT};
use clinic_core::{
    Allergy, AllergyList, Appt, Birthdate, ClinicError, HealthService, Name, Nric, Patient, Phone,
    Roster, Sex,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Public RosterFile operations
// ============================================================================

/// Roster file operations.
///
/// This is a zero-sized type used for namespacing roster persistence operations.
/// `render` and `parse` form the snapshot/restore pair: every patient, allergy list and
/// appointment survives a round trip unchanged.
pub struct RosterFile;

impl RosterFile {
    /// Parse a roster from YAML text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort "path" (e.g.
    /// `patients[0].appointments[1].dateTime`) to the failing field when the YAML does not match
    /// the wire schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if:
    /// - the text is not well-formed YAML ([`StorageError::InvalidYaml`]),
    /// - the YAML does not match the wire schema or contains unknown keys,
    /// - any value fails domain validation (bad NRIC, unknown health service, ...),
    /// - two patients share an NRIC.
    pub fn parse(yaml_text: &str) -> StorageResult<Roster> {
        serde_yaml::from_str::<serde::de::IgnoredAny>(yaml_text)?;

        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, RosterWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(StorageError::Translation(format!(
                    "Roster schema mismatch at {path}: {source}"
                )));
            }
        };

        wire_to_domain(wire)
    }

    /// Render a roster as YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if serialisation fails.
    pub fn render(roster: &Roster) -> StorageResult<String> {
        let wire = domain_to_wire(roster);
        Ok(serde_yaml::to_string(&wire)?)
    }

    /// Load the roster stored at `path`.
    ///
    /// A missing or blank file yields an empty roster, so a fresh installation starts clean.
    pub fn load(path: &Path) -> StorageResult<Roster> {
        if !path.exists() {
            tracing::warn!(
                "data file not found, starting with an empty roster: {}",
                path.display()
            );
            return Ok(Roster::new());
        }

        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Roster::new());
        }

        let roster = Self::parse(&contents)?;
        tracing::info!(patients = roster.len(), "loaded roster from {}", path.display());
        Ok(roster)
    }

    /// Save `roster` to `path`.
    ///
    /// Parent directories are created as needed. The file is written to a sibling temporary
    /// file first and then renamed over `path`, so an interrupted save never leaves a
    /// half-written roster behind.
    pub fn save(path: &Path, roster: &Roster) -> StorageResult<()> {
        let yaml = Self::render(roster)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = temp_path_for(path);
        fs::write(&tmp_path, yaml)?;
        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::info!(patients = roster.len(), "saved roster to {}", path.display());
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct RosterWire {
    #[serde(default)]
    pub patients: Vec<PatientWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct PatientWire {
    pub nric: String,
    pub name: String,
    pub sex: String,
    pub birthdate: String,
    pub phone: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergies: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub appointments: Vec<ApptWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct ApptWire {
    pub date_time: String,
    pub health_service: String,
}

// ============================================================================
// Translation helpers
// ============================================================================

fn domain_to_wire(roster: &Roster) -> RosterWire {
    RosterWire {
        patients: roster
            .patients()
            .map(|patient| PatientWire {
                nric: patient.nric().to_string(),
                name: patient.name().to_string(),
                sex: patient.sex().code().to_string(),
                birthdate: patient.birthdate().date().format(DATE_FORMAT).to_string(),
                phone: patient.phone().to_string(),
                allergies: patient.allergies().iter().map(|a| a.to_string()).collect(),
                appointments: patient
                    .appointments()
                    .iter()
                    .map(|appt| ApptWire {
                        date_time: appt.date_time().format(APPT_DATE_TIME_FORMAT).to_string(),
                        health_service: appt.health_service().label().to_string(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn wire_to_domain(wire: RosterWire) -> StorageResult<Roster> {
    let mut patients = Vec::with_capacity(wire.patients.len());
    for (index, patient) in wire.patients.into_iter().enumerate() {
        let context = format!("patients[{index}]");
        patients.push(patient_to_domain(patient).map_err(|source| {
            StorageError::InvalidRecord {
                context: context.clone(),
                source,
            }
        })?);
    }

    Roster::from_patients(patients).map_err(|source| StorageError::InvalidRecord {
        context: "roster".into(),
        source,
    })
}

fn patient_to_domain(wire: PatientWire) -> Result<Patient, ClinicError> {
    let birthdate = NaiveDate::parse_from_str(wire.birthdate.trim(), DATE_FORMAT)
        .map_err(|_| ClinicError::InvalidInput(Birthdate::MESSAGE_CONSTRAINTS.into()))
        .and_then(Birthdate::from_date)?;

    let allergies = wire
        .allergies
        .iter()
        .map(Allergy::parse)
        .collect::<Result<AllergyList, _>>()?;

    let appointments = wire
        .appointments
        .iter()
        .map(|appt| {
            Ok(Appt::new(
                Appt::parse_date_time(&appt.date_time)?,
                HealthService::parse(&appt.health_service)?,
            ))
        })
        .collect::<Result<Vec<_>, ClinicError>>()?;

    Ok(Patient::new(
        Nric::parse(&wire.nric)?,
        Name::parse(&wire.name)?,
        Sex::parse(&wire.sex)?,
        birthdate,
        Phone::parse(&wire.phone)?,
    )
    .with_allergies(allergies)
    .with_appointments(appointments))
}
