//! `view`: one patient's full record.

use crate::commands::{Command, CommandResult};
use crate::model::Nric;
use crate::{ClinicError, ClinicResult, Roster};

/// Shows the full record of one patient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewCommand {
    nric: Nric,
}

impl ViewCommand {
    pub const COMMAND_WORD: &'static str = "view";
    pub const MESSAGE_USAGE: &'static str = "view: Shows the details of the patient with the \
        given NRIC.\n\
        Parameters: NRIC\n\
        Example: view S1234567A";

    pub fn new(nric: Nric) -> Self {
        Self { nric }
    }
}

impl Command for ViewCommand {
    fn execute(&self, roster: &mut Roster) -> ClinicResult<CommandResult> {
        let patient = roster.get(&self.nric).ok_or(ClinicError::PatientNotFound)?;
        Ok(CommandResult::patient_detail(
            format!("Showing patient: {}", patient.name()),
            patient.clone(),
        ))
    }
}
