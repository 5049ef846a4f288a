//! Commands: discrete operations against the [`Roster`].
//!
//! Every command validates its preconditions before touching the roster, so a failed command
//! leaves the roster exactly as it found it. A successful command returns a [`CommandResult`]
//! carrying the view it produced.

mod add;
mod book_appt;
mod clear;
mod delete;
mod delete_appt;
mod edit;
mod filter;
mod find;
mod list;
mod result;
mod view;

pub use add::AddCommand;
pub use book_appt::BookApptCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use delete_appt::DeleteApptCommand;
pub use edit::{EditCommand, EditPatientDescriptor};
pub use filter::FilterCommand;
pub use find::FindCommand;
pub use list::ListCommand;
pub use result::{CommandResult, CommandView};
pub use view::ViewCommand;

use crate::{ClinicResult, Roster};

/// An operation that can be executed against the roster.
pub trait Command {
    /// Executes the command.
    ///
    /// # Errors
    ///
    /// Returns a [`ClinicError`](crate::ClinicError) describing the first precondition that
    /// failed. The roster is not modified in that case.
    fn execute(&self, roster: &mut Roster) -> ClinicResult<CommandResult>;
}

/// Every command the clinic understands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClinicCommand {
    Add(AddCommand),
    Delete(DeleteCommand),
    Edit(EditCommand),
    BookAppt(BookApptCommand),
    DeleteAppt(DeleteApptCommand),
    Filter(FilterCommand),
    Find(FindCommand),
    List(ListCommand),
    View(ViewCommand),
    Clear(ClearCommand),
}

impl ClinicCommand {
    pub fn command_word(&self) -> &'static str {
        match self {
            ClinicCommand::Add(_) => AddCommand::COMMAND_WORD,
            ClinicCommand::Delete(_) => DeleteCommand::COMMAND_WORD,
            ClinicCommand::Edit(_) => EditCommand::COMMAND_WORD,
            ClinicCommand::BookAppt(_) => BookApptCommand::COMMAND_WORD,
            ClinicCommand::DeleteAppt(_) => DeleteApptCommand::COMMAND_WORD,
            ClinicCommand::Filter(_) => FilterCommand::COMMAND_WORD,
            ClinicCommand::Find(_) => FindCommand::COMMAND_WORD,
            ClinicCommand::List(_) => ListCommand::COMMAND_WORD,
            ClinicCommand::View(_) => ViewCommand::COMMAND_WORD,
            ClinicCommand::Clear(_) => ClearCommand::COMMAND_WORD,
        }
    }

    /// Whether a successful run changes the roster and therefore needs persisting.
    pub fn mutates_roster(&self) -> bool {
        matches!(
            self,
            ClinicCommand::Add(_)
                | ClinicCommand::Delete(_)
                | ClinicCommand::Edit(_)
                | ClinicCommand::BookAppt(_)
                | ClinicCommand::DeleteAppt(_)
                | ClinicCommand::Clear(_)
        )
    }

    fn inner(&self) -> &dyn Command {
        match self {
            ClinicCommand::Add(c) => c,
            ClinicCommand::Delete(c) => c,
            ClinicCommand::Edit(c) => c,
            ClinicCommand::BookAppt(c) => c,
            ClinicCommand::DeleteAppt(c) => c,
            ClinicCommand::Filter(c) => c,
            ClinicCommand::Find(c) => c,
            ClinicCommand::List(c) => c,
            ClinicCommand::View(c) => c,
            ClinicCommand::Clear(c) => c,
        }
    }
}

impl Command for ClinicCommand {
    fn execute(&self, roster: &mut Roster) -> ClinicResult<CommandResult> {
        let command = self.command_word();
        tracing::debug!(command, "executing command");

        let result = self.inner().execute(roster);
        if let Err(e) = &result {
            tracing::debug!(command, error = %e, "command rejected");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HealthService;
    use crate::test_support::{appt, nric, typical_roster};
    use crate::ClinicError;

    #[test]
    fn test_dispatch_reaches_inner_command() {
        let mut roster = typical_roster();
        let command = ClinicCommand::BookAppt(BookApptCommand::new(
            nric("F2468135C"),
            appt("2025-01-02 15:00", HealthService::Consult),
        ));

        command.execute(&mut roster).expect("booking succeeds");

        assert_eq!(
            roster
                .get(&nric("F2468135C"))
                .expect("patient exists")
                .appointments()
                .len(),
            1
        );
    }

    #[test]
    fn test_dispatch_propagates_errors() {
        let mut roster = typical_roster();
        let err = ClinicCommand::View(ViewCommand::new(nric("S0000000Z")))
            .execute(&mut roster)
            .expect_err("unknown NRIC");
        assert_eq!(err, ClinicError::PatientNotFound);
    }

    #[test]
    fn test_mutates_roster() {
        assert!(ClinicCommand::Clear(ClearCommand).mutates_roster());
        assert!(!ClinicCommand::List(ListCommand).mutates_roster());
        assert!(!ClinicCommand::Find(FindCommand::new(vec!["x".into()])).mutates_roster());
    }

    #[test]
    fn test_command_word() {
        assert_eq!(ClinicCommand::List(ListCommand).command_word(), "list");
        assert_eq!(ClinicCommand::Clear(ClearCommand).command_word(), "clear");
    }
}
