//! `add`: register a new patient.

use crate::commands::{Command, CommandResult};
use crate::model::Patient;
use crate::{ClinicResult, Roster};

/// Registers a new patient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddCommand {
    patient: Patient,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Registers a new patient.\n\
        Parameters: n/NAME i/NRIC s/SEX d/BIRTHDATE p/PHONE [al/ALLERGY]...\n\
        Example: add n/John Doe i/S1234567A s/M d/1990-01-15 p/91234567 al/peanuts";

    pub fn new(patient: Patient) -> Self {
        Self { patient }
    }
}

impl Command for AddCommand {
    fn execute(&self, roster: &mut Roster) -> ClinicResult<CommandResult> {
        roster.add_patient(self.patient.clone())?;
        tracing::info!(nric = %self.patient.nric(), "patient added");

        Ok(CommandResult::patient_detail(
            format!("New patient added: {}", self.patient.name()),
            self.patient.clone(),
        ))
    }
}
