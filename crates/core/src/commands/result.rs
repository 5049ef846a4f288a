//! The value every successful command produces.

use crate::filter::FilteredAppointment;
use crate::model::Patient;

/// Which view the presentation layer should render, together with its payload.
///
/// Payloads are owned snapshots taken when the command ran; later commands never change them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandView {
    PatientList(Vec<Patient>),
    PatientDetail(Patient),
    AppointmentList(Vec<FilteredAppointment>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    view: CommandView,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>, view: CommandView) -> Self {
        Self {
            feedback: feedback.into(),
            view,
        }
    }

    pub fn patient_detail(feedback: impl Into<String>, patient: Patient) -> Self {
        Self::new(feedback, CommandView::PatientDetail(patient))
    }

    pub fn patient_list<'a>(
        feedback: impl Into<String>,
        patients: impl IntoIterator<Item = &'a Patient>,
    ) -> Self {
        Self::new(
            feedback,
            CommandView::PatientList(patients.into_iter().cloned().collect()),
        )
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn view(&self) -> &CommandView {
        &self.view
    }

    pub fn into_view(self) -> CommandView {
        self.view
    }
}
