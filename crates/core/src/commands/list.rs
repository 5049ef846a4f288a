//! `list` / `home`: every patient in NRIC order.

use crate::commands::{Command, CommandResult};
use crate::{ClinicResult, Roster};

/// Lists every patient. Also reachable as `home`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const COMMAND_ALIAS: &'static str = "home";
    pub const MESSAGE_USAGE: &'static str = "list: Lists all patients. Alias: home";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all patients";
}

impl Command for ListCommand {
    fn execute(&self, roster: &mut Roster) -> ClinicResult<CommandResult> {
        Ok(CommandResult::patient_list(
            Self::MESSAGE_SUCCESS,
            roster.patients(),
        ))
    }
}
