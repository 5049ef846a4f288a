//! The patient aggregate.

use crate::model::{AllergyList, Appt, Birthdate, Name, Nric, Phone, Sex};

/// A patient record: identity fields, allergies and booked appointments.
///
/// Patients are owned by the [`Roster`](crate::Roster). Equality is structural over every
/// field; lookups by identity go through the NRIC instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    nric: Nric,
    name: Name,
    sex: Sex,
    birthdate: Birthdate,
    phone: Phone,
    allergies: AllergyList,
    appts: Vec<Appt>,
}

impl Patient {
    /// Creates a patient with no allergies and no appointments.
    pub fn new(nric: Nric, name: Name, sex: Sex, birthdate: Birthdate, phone: Phone) -> Self {
        Self {
            nric,
            name,
            sex,
            birthdate,
            phone,
            allergies: AllergyList::new(),
            appts: Vec::new(),
        }
    }

    pub fn with_allergies(mut self, allergies: AllergyList) -> Self {
        self.allergies = allergies;
        self
    }

    pub fn with_appointments(mut self, appts: Vec<Appt>) -> Self {
        self.appts = appts;
        self
    }

    pub fn nric(&self) -> &Nric {
        &self.nric
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn birthdate(&self) -> Birthdate {
        self.birthdate
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn allergies(&self) -> &AllergyList {
        &self.allergies
    }

    /// Booked appointments, in booking order.
    pub fn appointments(&self) -> &[Appt] {
        &self.appts
    }

    pub fn has_appointment(&self, appt: &Appt) -> bool {
        self.appts.contains(appt)
    }

    /// Appends an appointment.
    ///
    /// Performs no duplicate check; callers that need one (booking) check
    /// [`has_appointment`](Self::has_appointment) first.
    pub fn add_appointment(&mut self, appt: Appt) {
        self.appts.push(appt);
    }

    /// Removes the first appointment equal to `appt`. Returns `false` if there was none.
    pub fn remove_appointment(&mut self, appt: &Appt) -> bool {
        match self.appts.iter().position(|existing| existing == appt) {
            Some(index) => {
                self.appts.remove(index);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; NRIC: {}; Sex: {}; Birthdate: {}; Phone: {}",
            self.name, self.nric, self.sex, self.birthdate, self.phone
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Appt, HealthService};
    use crate::test_support::{appt, typical_patient};

    #[test]
    fn test_add_appointment_appends() {
        let mut patient = typical_patient("S1234567A", "Alice Pauline");
        let first = appt("2024-09-01 10:00", HealthService::Consult);
        let second = appt("2024-08-01 10:00", HealthService::Vaccination);

        patient.add_appointment(first.clone());
        patient.add_appointment(second.clone());

        assert_eq!(patient.appointments(), &[first, second]);
    }

    #[test]
    fn test_remove_appointment() {
        let target = appt("2024-09-01 10:00", HealthService::Consult);
        let mut patient =
            typical_patient("S1234567A", "Alice Pauline").with_appointments(vec![target.clone()]);

        assert!(patient.remove_appointment(&target));
        assert!(patient.appointments().is_empty());
        assert!(!patient.remove_appointment(&target));
    }

    #[test]
    fn test_equality_covers_appointments() {
        let plain = typical_patient("S1234567A", "Alice Pauline");
        let booked = plain
            .clone()
            .with_appointments(vec![appt("2024-09-01 10:00", HealthService::Consult)]);
        assert_eq!(plain, typical_patient("S1234567A", "Alice Pauline"));
        assert_ne!(plain, booked);
    }

    #[test]
    fn test_has_appointment() {
        let booked = appt("2024-09-01 10:00", HealthService::Consult);
        let patient =
            typical_patient("S1234567A", "Alice Pauline").with_appointments(vec![booked.clone()]);
        assert!(patient.has_appointment(&booked));
        assert!(!patient.has_appointment(&Appt::new(
            booked.date_time(),
            HealthService::Vaccination
        )));
    }
}
