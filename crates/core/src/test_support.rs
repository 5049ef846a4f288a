//! Shared fixtures for unit tests.

use crate::model::{
    Allergy, AllergyList, Appt, Birthdate, HealthService, Name, Nric, Patient, Phone, Sex,
};
use crate::Roster;

pub(crate) fn nric(value: &str) -> Nric {
    Nric::parse(value).expect("fixture NRIC should be valid")
}

pub(crate) fn appt(date_time: &str, service: HealthService) -> Appt {
    Appt::new(
        Appt::parse_date_time(date_time).expect("fixture date-time should be valid"),
        service,
    )
}

pub(crate) fn allergies(values: &[&str]) -> AllergyList {
    values
        .iter()
        .map(|v| Allergy::parse(v).expect("fixture allergy should be valid"))
        .collect()
}

pub(crate) fn typical_patient(nric_value: &str, name: &str) -> Patient {
    Patient::new(
        nric(nric_value),
        Name::parse(name).expect("fixture name should be valid"),
        Sex::Female,
        Birthdate::parse("1990-01-15").expect("fixture birthdate should be valid"),
        Phone::parse("91234567").expect("fixture phone should be valid"),
    )
}

/// Three patients with a spread of appointments, used by filter and command tests.
///
/// - `S1234567A` Alice Pauline: vaccination 2024-09-01 10:00, consult 2024-12-05 09:00
/// - `T7654321B` Benson Meier: vaccination 2024-08-29 14:00, blood test 2024-10-10 08:30
/// - `F2468135C` Carl Kurz: no appointments
pub(crate) fn typical_roster() -> Roster {
    let alice = typical_patient("S1234567A", "Alice Pauline")
        .with_allergies(allergies(&["peanuts"]))
        .with_appointments(vec![
            appt("2024-09-01 10:00", HealthService::Vaccination),
            appt("2024-12-05 09:00", HealthService::Consult),
        ]);
    let benson = typical_patient("T7654321B", "Benson Meier").with_appointments(vec![
        appt("2024-08-29 14:00", HealthService::Vaccination),
        appt("2024-10-10 08:30", HealthService::BloodTest),
    ]);
    let carl = typical_patient("F2468135C", "Carl Kurz");

    Roster::from_patients(vec![alice, benson, carl]).expect("fixture roster has unique NRICs")
}
