//! A loaded roster bound to its data file.

use crate::parser::{self, Input, ParseError};
use crate::render;
use clinic_core::{ClinicCommand, ClinicConfig, ClinicError, Command, CommandResult, Roster};
use clinic_storage::{RosterFile, StorageError};
use std::path::PathBuf;

/// Why a line of input could not be carried out.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] ClinicError),

    #[error("failed to save roster: {0}")]
    Storage(#[from] StorageError),
}

/// What the caller should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Exit,
}

/// Owns the in-memory roster and writes it back after every successful change.
pub struct Session {
    data_file: PathBuf,
    roster: Roster,
}

impl Session {
    /// Loads the roster named by `config`.
    pub fn open(config: &ClinicConfig) -> Result<Self, StorageError> {
        let data_file = config.data_file().to_path_buf();
        let roster = RosterFile::load(&data_file)?;
        Ok(Self { data_file, roster })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Parses and carries out one line of input.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, SessionError> {
        match parser::parse_input(line)? {
            Input::Exit => Ok(Outcome::Exit),
            Input::Help(topic) => Ok(Outcome::Output(parser::usage(topic.as_deref())?)),
            Input::Command(command) => {
                let result = self.execute(&command)?;
                Ok(Outcome::Output(render::render(&result)))
            }
        }
    }

    /// Executes `command`, persisting the roster if the command changed it.
    ///
    /// The command runs against a copy of the roster. The copy only replaces the live roster
    /// once it has been saved, so neither memory nor disk changes when either step fails.
    pub fn execute(&mut self, command: &ClinicCommand) -> Result<CommandResult, SessionError> {
        if !command.mutates_roster() {
            return Ok(command.execute(&mut self.roster)?);
        }

        let mut working = self.roster.clone();
        let result = command.execute(&mut working)?;
        RosterFile::save(&self.data_file, &working)?;
        self.roster = working;

        tracing::debug!(command = command.command_word(), "roster updated");
        Ok(result)
    }
}
