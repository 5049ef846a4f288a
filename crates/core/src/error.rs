//! Error taxonomy for command execution and value validation.

use crate::constants::{
    MESSAGE_APPOINTMENT_NOT_FOUND, MESSAGE_DUPLICATE_APPOINTMENT, MESSAGE_DUPLICATE_PATIENT,
    MESSAGE_PATIENT_NOT_FOUND,
};

/// Broad category of a [`ClinicError`].
///
/// Callers that only need to know *how* a command failed (lookup miss, conflict with existing
/// state, or bad input) can match on this instead of the individual variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClinicError {
    #[error("{}", MESSAGE_PATIENT_NOT_FOUND)]
    PatientNotFound,
    #[error("{}", MESSAGE_APPOINTMENT_NOT_FOUND)]
    AppointmentNotFound,
    #[error("{}", MESSAGE_DUPLICATE_APPOINTMENT)]
    DuplicateAppointment,
    #[error("{}", MESSAGE_DUPLICATE_PATIENT)]
    DuplicateNric,
    #[error("{0}")]
    InvalidInput(String),
}

impl ClinicError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClinicError::PatientNotFound | ClinicError::AppointmentNotFound => ErrorKind::NotFound,
            ClinicError::DuplicateAppointment | ClinicError::DuplicateNric => ErrorKind::Conflict,
            ClinicError::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ClinicError::InvalidInput(message.into())
    }
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
