//! `deleteappt`: remove one appointment from a patient.

use crate::commands::{Command, CommandResult};
use crate::model::{Appt, Nric};
use crate::{ClinicError, ClinicResult, Roster};

/// Cancels a booked appointment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteApptCommand {
    nric: Nric,
    appt: Appt,
}

impl DeleteApptCommand {
    pub const COMMAND_WORD: &'static str = "deleteappt";
    pub const MESSAGE_USAGE: &'static str = "deleteappt: Deletes an appointment of the patient \
        with the given NRIC.\n\
        Parameters: NRIC dt/YYYY-MM-DD HH:MM h/HEALTH_SERVICE\n\
        Example: deleteappt S1234567A dt/2024-09-01 10:00 h/VACCINATION";

    pub fn new(nric: Nric, appt: Appt) -> Self {
        Self { nric, appt }
    }
}

impl Command for DeleteApptCommand {
    fn execute(&self, roster: &mut Roster) -> ClinicResult<CommandResult> {
        let patient = roster.get_mut(&self.nric)?;

        if !patient.remove_appointment(&self.appt) {
            return Err(ClinicError::AppointmentNotFound);
        }
        tracing::info!(nric = %self.nric, appt = %self.appt, "appointment deleted");

        Ok(CommandResult::patient_detail(
            format!("Appointment deleted successfully for {}", patient.name()),
            patient.clone(),
        ))
    }
}
