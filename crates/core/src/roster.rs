//! The in-memory roster of patients.
//!
//! The roster is an index from [`Nric`] to the owned [`Patient`] record. Commands look a patient
//! up by key and mutate the owned record in place, so there is exactly one canonical instance of
//! every patient. The roster keeps no "current view": commands return the view they produce in
//! their [`CommandResult`](crate::CommandResult).

use crate::model::{Nric, Patient};
use crate::{ClinicError, ClinicResult};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    patients: BTreeMap<Nric, Patient>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from a list of patients.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::DuplicateNric`] if two patients share an NRIC.
    pub fn from_patients(patients: impl IntoIterator<Item = Patient>) -> ClinicResult<Self> {
        let mut roster = Self::new();
        for patient in patients {
            roster.add_patient(patient)?;
        }
        Ok(roster)
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn contains(&self, nric: &Nric) -> bool {
        self.patients.contains_key(nric)
    }

    pub fn get(&self, nric: &Nric) -> Option<&Patient> {
        self.patients.get(nric)
    }

    /// Looks a patient up for in-place mutation.
    pub(crate) fn get_mut(&mut self, nric: &Nric) -> ClinicResult<&mut Patient> {
        self.patients
            .get_mut(nric)
            .ok_or(ClinicError::PatientNotFound)
    }

    /// Iterates patients in NRIC order.
    pub fn patients(&self) -> impl Iterator<Item = &Patient> {
        self.patients.values()
    }

    /// Adds a new patient.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::DuplicateNric`] if a patient with the same NRIC exists; the
    /// roster is left unchanged.
    pub fn add_patient(&mut self, patient: Patient) -> ClinicResult<()> {
        if self.contains(patient.nric()) {
            return Err(ClinicError::DuplicateNric);
        }
        self.patients.insert(patient.nric().clone(), patient);
        Ok(())
    }

    /// Removes and returns the patient with `nric`.
    pub fn remove_patient(&mut self, nric: &Nric) -> ClinicResult<Patient> {
        self.patients
            .remove(nric)
            .ok_or(ClinicError::PatientNotFound)
    }

    /// Replaces the patient currently keyed by `target` with `edited`.
    ///
    /// `edited` may carry a different NRIC, in which case the patient is re-keyed.
    ///
    /// # Errors
    ///
    /// - [`ClinicError::PatientNotFound`] if no patient has NRIC `target`.
    /// - [`ClinicError::DuplicateNric`] if `edited` takes the NRIC of a *different* patient.
    ///
    /// On error the roster is unchanged.
    pub fn replace_patient(&mut self, target: &Nric, edited: Patient) -> ClinicResult<()> {
        if !self.contains(target) {
            return Err(ClinicError::PatientNotFound);
        }
        if edited.nric() != target && self.contains(edited.nric()) {
            return Err(ClinicError::DuplicateNric);
        }

        self.patients.remove(target);
        self.patients.insert(edited.nric().clone(), edited);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.patients.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{nric, typical_patient, typical_roster};

    #[test]
    fn test_from_patients_rejects_duplicate_nric() {
        let err = Roster::from_patients(vec![
            typical_patient("S1234567A", "Alice Pauline"),
            typical_patient("s1234567a", "Alice Again"),
        ])
        .expect_err("duplicate NRIC should be rejected");
        assert_eq!(err, ClinicError::DuplicateNric);
    }

    #[test]
    fn test_patients_iterate_in_nric_order() {
        let roster = typical_roster();
        let order: Vec<&str> = roster.patients().map(|p| p.nric().as_str()).collect();
        assert_eq!(order, vec!["F2468135C", "S1234567A", "T7654321B"]);
    }

    #[test]
    fn test_add_patient_rejects_duplicate_and_leaves_roster_unchanged() {
        let mut roster = typical_roster();
        let before = roster.clone();
        let err = roster
            .add_patient(typical_patient("S1234567A", "Someone Else"))
            .expect_err("duplicate should fail");
        assert_eq!(err, ClinicError::DuplicateNric);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_remove_patient() {
        let mut roster = typical_roster();
        let removed = roster
            .remove_patient(&nric("S1234567A"))
            .expect("patient exists");
        assert_eq!(removed.name().as_str(), "Alice Pauline");
        assert_eq!(roster.len(), 2);
        assert_eq!(
            roster.remove_patient(&nric("S1234567A")),
            Err(ClinicError::PatientNotFound)
        );
    }

    #[test]
    fn test_replace_patient_rekeys_on_nric_change() {
        let mut roster = typical_roster();
        let edited = typical_patient("G1111111Z", "Alice Pauline");
        roster
            .replace_patient(&nric("S1234567A"), edited)
            .expect("replace should succeed");
        assert!(!roster.contains(&nric("S1234567A")));
        assert!(roster.contains(&nric("G1111111Z")));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_replace_patient_rejects_collision_with_other_patient() {
        let mut roster = typical_roster();
        let before = roster.clone();
        let err = roster
            .replace_patient(
                &nric("S1234567A"),
                typical_patient("T7654321B", "Alice Pauline"),
            )
            .expect_err("collision should fail");
        assert_eq!(err, ClinicError::DuplicateNric);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_replace_patient_keeping_own_nric_is_allowed() {
        let mut roster = typical_roster();
        roster
            .replace_patient(
                &nric("S1234567A"),
                typical_patient("S1234567A", "Alice Tan"),
            )
            .expect("keeping own NRIC should succeed");
        let patient = roster.get(&nric("S1234567A")).expect("patient exists");
        assert_eq!(patient.name().as_str(), "Alice Tan");
    }

    #[test]
    fn test_nric_is_unique_across_roster() {
        let roster = typical_roster();
        let mut seen = std::collections::HashSet::new();
        for patient in roster.patients() {
            assert!(seen.insert(patient.nric().clone()));
        }
    }
}
