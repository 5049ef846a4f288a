//! Constants used throughout the clinic core crate.
//!
//! This module keeps user-facing messages and configuration defaults in one place so that
//! commands, tests and the command-line front end agree on the exact wording.

/// Default location of the roster data file when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "data/clinic.yaml";

/// Environment variable consulted for the roster data file location.
pub const DATA_FILE_ENV_VAR: &str = "CLINIC_DATA_FILE";

/// Format used for appointment date-times, both on input and on display.
pub const APPT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format used for calendar dates (birthdates, filter bounds).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const MESSAGE_PATIENT_NOT_FOUND: &str = "Patient not found";
pub const MESSAGE_APPOINTMENT_NOT_FOUND: &str = "Appointment not found";
pub const MESSAGE_DUPLICATE_APPOINTMENT: &str = "Appointment already exists on this date and time";
pub const MESSAGE_DUPLICATE_PATIENT: &str = "This patient already exists in the system";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided";
pub const MESSAGE_INVALID_DATE_RANGE: &str = "End date must not be before start date";
