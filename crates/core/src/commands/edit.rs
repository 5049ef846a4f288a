//! `edit`: change the details of an existing patient.
//!
//! The edited patient is built in full before the roster is touched. Changing the NRIC re-keys
//! the patient, and fails if another patient already holds the new NRIC.

use crate::commands::{Command, CommandResult};
use crate::constants::MESSAGE_NOT_EDITED;
use crate::model::{AllergyList, Birthdate, Name, Nric, Patient, Phone, Sex};
use crate::{ClinicError, ClinicResult, Roster};

/// The fields to change on a patient. `None` leaves a field as it is.
///
/// `allergies`, when present, replaces the whole allergy list (an empty list clears it).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditPatientDescriptor {
    pub name: Option<Name>,
    pub nric: Option<Nric>,
    pub sex: Option<Sex>,
    pub birthdate: Option<Birthdate>,
    pub phone: Option<Phone>,
    pub allergies: Option<AllergyList>,
}

impl EditPatientDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.nric.is_some()
            || self.sex.is_some()
            || self.birthdate.is_some()
            || self.phone.is_some()
            || self.allergies.is_some()
    }

    /// Builds the edited copy of `patient`. Appointments carry over unchanged.
    fn apply(&self, patient: &Patient) -> Patient {
        Patient::new(
            self.nric.clone().unwrap_or_else(|| patient.nric().clone()),
            self.name.clone().unwrap_or_else(|| patient.name().clone()),
            self.sex.unwrap_or(patient.sex()),
            self.birthdate.unwrap_or(patient.birthdate()),
            self.phone.clone().unwrap_or_else(|| patient.phone().clone()),
        )
        .with_allergies(
            self.allergies
                .clone()
                .unwrap_or_else(|| patient.allergies().clone()),
        )
        .with_appointments(patient.appointments().to_vec())
    }
}

/// Edits the details of an existing patient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditCommand {
    nric: Nric,
    descriptor: EditPatientDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the patient with the \
        given NRIC. Existing values are overwritten; al/ replaces all allergies.\n\
        Parameters: NRIC [n/NAME] [i/NRIC] [s/SEX] [d/BIRTHDATE] [p/PHONE] [al/ALLERGY]...\n\
        Example: edit S1234567A p/91234567 al/peanuts";

    pub fn new(nric: Nric, descriptor: EditPatientDescriptor) -> Self {
        Self { nric, descriptor }
    }
}

impl Command for EditCommand {
    fn execute(&self, roster: &mut Roster) -> ClinicResult<CommandResult> {
        if !self.descriptor.is_any_field_edited() {
            return Err(ClinicError::invalid(MESSAGE_NOT_EDITED));
        }

        let current = roster.get(&self.nric).ok_or(ClinicError::PatientNotFound)?;
        let edited = self.descriptor.apply(current);

        roster.replace_patient(&self.nric, edited.clone())?;
        tracing::info!(nric = %self.nric, new_nric = %edited.nric(), "patient edited");

        Ok(CommandResult::patient_detail(
            format!("Edited patient: {}", edited.name()),
            edited,
        ))
    }
}
