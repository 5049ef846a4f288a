//! `bookappt`: record an appointment under an existing patient.
//!
//! The patient is looked up by NRIC across the whole roster. Booking the same service at the
//! same date-time twice is rejected.

use crate::commands::{Command, CommandResult};
use crate::model::{Appt, Nric};
use crate::{ClinicError, ClinicResult, Roster};

/// Books an appointment for the patient with the given NRIC.
///
/// Lookup, then duplicate check, then mutation: the patient's appointment list only changes once
/// both checks have passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookApptCommand {
    nric: Nric,
    appt: Appt,
}

impl BookApptCommand {
    pub const COMMAND_WORD: &'static str = "bookappt";
    pub const MESSAGE_USAGE: &'static str = "bookappt: Records an appointment under a health \
        service for a registered patient.\n\
        Parameters: NRIC dt/YYYY-MM-DD HH:MM h/HEALTH_SERVICE\n\
        Example: bookappt S1234567A dt/2024-09-01 10:00 h/VACCINATION";

    pub fn new(nric: Nric, appt: Appt) -> Self {
        Self { nric, appt }
    }
}

impl Command for BookApptCommand {
    fn execute(&self, roster: &mut Roster) -> ClinicResult<CommandResult> {
        let patient = roster.get_mut(&self.nric)?;

        if patient.has_appointment(&self.appt) {
            return Err(ClinicError::DuplicateAppointment);
        }

        patient.add_appointment(self.appt.clone());
        tracing::info!(nric = %self.nric, appt = %self.appt, "appointment booked");

        Ok(CommandResult::patient_detail(
            format!(
                "Appointment added successfully for {}\nInput \"home\" to return to home page",
                patient.name()
            ),
            patient.clone(),
        ))
    }
}
