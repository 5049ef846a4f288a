//! `filter`: appointments across all patients within a date range.

use crate::commands::{Command, CommandResult, CommandView};
use crate::filter::{filter_appointments, AppointmentDateFilter};
use crate::{ClinicResult, Roster};

/// Lists appointments across all patients within a date range, optionally restricted to some
/// health services, in date-time order.
///
/// Read-only: the roster is not modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCommand {
    filter: AppointmentDateFilter,
}

impl FilterCommand {
    pub const COMMAND_WORD: &'static str = "filter";
    pub const MESSAGE_USAGE: &'static str = "filter: Lists appointments between two dates \
        (inclusive), optionally only for the given health services.\n\
        Parameters: sd/START_DATE ed/END_DATE [h/HEALTH_SERVICE]...\n\
        Example: filter sd/2024-08-30 ed/2024-11-30 h/VACCINATION";
    pub const MESSAGE_SUCCESS: &'static str = "List of appointments sorted by date and time";

    pub fn new(filter: AppointmentDateFilter) -> Self {
        Self { filter }
    }
}

impl Command for FilterCommand {
    fn execute(&self, roster: &mut Roster) -> ClinicResult<CommandResult> {
        let appts = filter_appointments(roster, &self.filter);
        tracing::debug!(
            start = %self.filter.start(),
            end = %self.filter.end(),
            matches = appts.len(),
            "appointments filtered"
        );

        Ok(CommandResult::new(
            Self::MESSAGE_SUCCESS,
            CommandView::AppointmentList(appts),
        ))
    }
}
