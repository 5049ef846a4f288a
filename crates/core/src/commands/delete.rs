//! `delete`: remove a patient and their appointments.

use crate::commands::{Command, CommandResult};
use crate::model::Nric;
use crate::{ClinicResult, Roster};

/// Removes a patient, and with them all of their appointments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteCommand {
    nric: Nric,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the patient with the given NRIC.\n\
        Parameters: NRIC\n\
        Example: delete S1234567A";

    pub fn new(nric: Nric) -> Self {
        Self { nric }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, roster: &mut Roster) -> ClinicResult<CommandResult> {
        let removed = roster.remove_patient(&self.nric)?;
        tracing::info!(nric = %self.nric, "patient deleted");

        Ok(CommandResult::patient_list(
            format!("Deleted patient: {}", removed.name()),
            roster.patients(),
        ))
    }
}
