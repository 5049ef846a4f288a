//! Cross-patient appointment filtering.
//!
//! A filter run walks every patient's appointments, keeps those accepted by an
//! [`AppointmentDateFilter`], pairs each with its owner and returns them as one globally ordered
//! sequence of [`FilteredAppointment`]s.

use crate::constants::MESSAGE_INVALID_DATE_RANGE;
use crate::model::{Appt, HealthService, Name, Nric};
use crate::{ClinicError, ClinicResult, Roster};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Query value: an inclusive date range plus an optional set of accepted services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentDateFilter {
    start: NaiveDate,
    end: NaiveDate,
    services: BTreeSet<HealthService>,
}

impl AppointmentDateFilter {
    /// Creates a filter. An empty `services` set accepts every service.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidInput`] if `end` is before `start`.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        services: impl IntoIterator<Item = HealthService>,
    ) -> ClinicResult<Self> {
        if end < start {
            return Err(ClinicError::invalid(MESSAGE_INVALID_DATE_RANGE));
        }
        Ok(Self {
            start,
            end,
            services: services.into_iter().collect(),
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn services(&self) -> &BTreeSet<HealthService> {
        &self.services
    }

    /// Date in range AND (no service restriction OR service in the set).
    pub fn accepts(&self, appt: &Appt) -> bool {
        let date = appt.date_time().date();
        let in_range = self.start <= date && date <= self.end;
        let service_ok =
            self.services.is_empty() || self.services.contains(&appt.health_service());
        in_range && service_ok
    }
}

/// An appointment paired with the patient who owns it.
///
/// Derived and transient: it only exists inside a filter result and holds owned copies, so it
/// never aliases roster state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteredAppointment {
    appt: Appt,
    nric: Nric,
    name: Name,
}

impl FilteredAppointment {
    pub fn new(appt: Appt, nric: Nric, name: Name) -> Self {
        Self { appt, nric, name }
    }

    pub fn appt(&self) -> &Appt {
        &self.appt
    }

    pub fn nric(&self) -> &Nric {
        &self.nric
    }

    pub fn name(&self) -> &Name {
        &self.name
    }
}

/// Date-time ascending, then owner NRIC, then health service.
///
/// The owner's name is compared last only so the order agrees with `Eq`.
impl Ord for FilteredAppointment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.appt
            .date_time()
            .cmp(&other.appt.date_time())
            .then_with(|| self.nric.cmp(&other.nric))
            .then_with(|| self.appt.health_service().cmp(&other.appt.health_service()))
            .then_with(|| self.name.as_str().cmp(other.name.as_str()))
    }
}

impl PartialOrd for FilteredAppointment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Collects every appointment in `roster` accepted by `filter`, sorted by
/// [`FilteredAppointment`]'s ordering.
///
/// Appointments of different patients that share a date-time are all kept.
pub fn filter_appointments(
    roster: &Roster,
    filter: &AppointmentDateFilter,
) -> Vec<FilteredAppointment> {
    let mut matches: Vec<FilteredAppointment> = roster
        .patients()
        .flat_map(|patient| {
            patient
                .appointments()
                .iter()
                .filter(|appt| appt.is_between_dates_and_match_service(filter))
                .map(|appt| {
                    FilteredAppointment::new(
                        appt.clone(),
                        patient.nric().clone(),
                        patient.name().clone(),
                    )
                })
        })
        .collect();
    matches.sort();
    matches
}
