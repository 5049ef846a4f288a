//! A single booked appointment.

use crate::constants::APPT_DATE_TIME_FORMAT;
use crate::filter::AppointmentDateFilter;
use crate::model::HealthService;
use crate::{ClinicError, ClinicResult};
use chrono::{NaiveDateTime, Timelike};

/// An appointment: when, and for which health service.
///
/// Equality is structural. Two appointments with the same date-time and service are the same
/// appointment, which is what duplicate booking checks rely on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Appt {
    date_time: NaiveDateTime,
    health_service: HealthService,
}

impl Appt {
    pub const MESSAGE_DATE_TIME_CONSTRAINTS: &'static str =
        "Appointment date-time should be in the format YYYY-MM-DD HH:MM";

    /// Creates an appointment, truncating `date_time` to the minute.
    pub fn new(date_time: NaiveDateTime, health_service: HealthService) -> Self {
        let date_time = date_time
            .date()
            .and_hms_opt(date_time.hour(), date_time.minute(), 0)
            .unwrap_or(date_time);
        Self {
            date_time,
            health_service,
        }
    }

    /// Parses a `YYYY-MM-DD HH:MM` appointment date-time.
    pub fn parse_date_time(input: impl AsRef<str>) -> ClinicResult<NaiveDateTime> {
        let normalised = input.as_ref().split_whitespace().collect::<Vec<_>>().join(" ");
        NaiveDateTime::parse_from_str(&normalised, APPT_DATE_TIME_FORMAT)
            .map_err(|_| ClinicError::invalid(Self::MESSAGE_DATE_TIME_CONSTRAINTS))
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn health_service(&self) -> HealthService {
        self.health_service
    }

    /// Returns `true` if this appointment falls on a date inside the filter's inclusive range
    /// *and* its service is accepted by the filter.
    pub fn is_between_dates_and_match_service(&self, filter: &AppointmentDateFilter) -> bool {
        filter.accepts(self)
    }
}

impl std::fmt::Display for Appt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.date_time.format(APPT_DATE_TIME_FORMAT),
            self.health_service
        )
    }
}
