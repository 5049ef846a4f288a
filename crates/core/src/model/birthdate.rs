//! Dates of birth, validated against the local date.

use crate::constants::DATE_FORMAT;
use crate::{ClinicError, ClinicResult};
use chrono::{Local, NaiveDate};

/// A patient's date of birth. Never later than the day it was recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Birthdate should be a valid date in the format YYYY-MM-DD and must not be in the future";

    /// Parses a `YYYY-MM-DD` birthdate, rejecting dates after today's local date.
    pub fn parse(input: impl AsRef<str>) -> ClinicResult<Self> {
        let date = NaiveDate::parse_from_str(input.as_ref().trim(), DATE_FORMAT)
            .map_err(|_| ClinicError::invalid(Self::MESSAGE_CONSTRAINTS))?;
        Self::from_date(date)
    }

    pub fn from_date(date: NaiveDate) -> ClinicResult<Self> {
        if date > Local::now().date_naive() {
            return Err(ClinicError::invalid(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for Birthdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    #[test]
    fn test_parse_accepts_past_dates() {
        let birthdate = Birthdate::parse("1990-01-15").expect("valid birthdate");
        assert_eq!(birthdate.to_string(), "1990-01-15");
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        assert!(Birthdate::parse("15-01-1990").is_err());
        assert!(Birthdate::parse("1990-02-30").is_err());
    }

    #[test]
    fn test_from_date_rejects_future() {
        let tomorrow = Local::now()
            .date_naive()
            .checked_add_days(Days::new(1))
            .expect("tomorrow exists");
        assert!(Birthdate::from_date(tomorrow).is_err());
    }
}
