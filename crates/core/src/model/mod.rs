//! Domain model: identity and value types, appointments, allergies and the patient aggregate.

pub mod allergy;
pub mod appt;
pub mod birthdate;
pub mod health_service;
pub mod name;
pub mod nric;
pub mod patient;
pub mod phone;
pub mod sex;

pub use allergy::{Allergy, AllergyList};
pub use appt::Appt;
pub use birthdate::Birthdate;
pub use health_service::HealthService;
pub use name::Name;
pub use nric::Nric;
pub use patient::Patient;
pub use phone::Phone;
pub use sex::Sex;
