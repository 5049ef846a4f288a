//! `clear`: drop every patient record.

use crate::commands::{Command, CommandResult};
use crate::{ClinicResult, Roster};

/// Removes every patient from the roster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const MESSAGE_USAGE: &'static str = "clear: Deletes all patient records";
    pub const MESSAGE_SUCCESS: &'static str = "All patient records have been cleared!";
}

impl Command for ClearCommand {
    fn execute(&self, roster: &mut Roster) -> ClinicResult<CommandResult> {
        let removed = roster.len();
        roster.clear();
        tracing::info!(removed, "roster cleared");

        Ok(CommandResult::patient_list(
            Self::MESSAGE_SUCCESS,
            roster.patients(),
        ))
    }
}
