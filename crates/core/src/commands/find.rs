//! `find`: patients whose names contain any of the given keywords.

use crate::commands::{Command, CommandResult};
use crate::{ClinicResult, Roster};

/// Lists patients whose name contains any of the keywords as a whole word, ignoring case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MESSAGE_USAGE: &'static str = "find: Finds patients whose names contain any of \
        the given keywords (case-insensitive).\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice bernice";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Command for FindCommand {
    fn execute(&self, roster: &mut Roster) -> ClinicResult<CommandResult> {
        let matches: Vec<_> = roster
            .patients()
            .filter(|patient| {
                self.keywords
                    .iter()
                    .any(|keyword| patient.name().contains_word_ignore_case(keyword))
            })
            .collect();

        Ok(CommandResult::patient_list(
            format!("{} patients listed!", matches.len()),
            matches,
        ))
    }
}
