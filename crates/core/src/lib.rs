//! # Clinic Core
//!
//! Core business logic for the clinic record manager.
//!
//! This crate contains the in-memory data model and the command engine:
//! - Self-validating value types (NRIC, name, phone, birthdate, allergies, health services)
//! - The [`Patient`] aggregate and the [`Roster`] that indexes patients by NRIC
//! - Cross-patient appointment filtering ([`filter`])
//! - Commands that validate, mutate and report a [`CommandResult`]
//!
//! **No I/O**: reading command text, rendering results and persisting the roster belong in
//! `clinic-cli` and `clinic-storage`.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod model;
pub mod roster;

mod validation;

#[cfg(test)]
mod test_support;

pub use commands::{ClinicCommand, Command, CommandResult, CommandView};
pub use config::ClinicConfig;
pub use error::{ClinicError, ClinicResult, ErrorKind};
pub use filter::{filter_appointments, AppointmentDateFilter, FilteredAppointment};
pub use model::{
    Allergy, AllergyList, Appt, Birthdate, HealthService, Name, Nric, Patient, Phone, Sex,
};
pub use roster::Roster;
