use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when validating birth details
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BirthDetailsError {
    #[error("Invalid calendar date: {year:04}-{month:02}-{date:02}")]
    InvalidDate { year: i32, month: u32, date: u32 },
    #[error("Invalid time of day: {hours:02}:{minutes:02}:{seconds:02}")]
    InvalidTime { hours: u32, minutes: u32, seconds: u32 },
    #[error("Latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Birth moment and place, in the provider's field naming.
///
/// `timezone` is the UTC offset in hours (e.g. `-5.0`, `5.5`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    pub year: i32,
    pub month: u32,
    pub date: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: f64,
}

impl BirthDetails {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        date: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
        latitude: f64,
        longitude: f64,
        timezone: f64,
    ) -> Self {
        Self {
            year,
            month,
            date,
            hours,
            minutes,
            seconds,
            latitude,
            longitude,
            timezone,
        }
    }

    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.date)
    }

    /// Check calendar date, clock time and coordinate ranges.
    pub fn validate(&self) -> Result<(), BirthDetailsError> {
        if self.calendar_date().is_none() {
            return Err(BirthDetailsError::InvalidDate {
                year: self.year,
                month: self.month,
                date: self.date,
            });
        }
        if NaiveTime::from_hms_opt(self.hours, self.minutes, self.seconds).is_none() {
            return Err(BirthDetailsError::InvalidTime {
                hours: self.hours,
                minutes: self.minutes,
                seconds: self.seconds,
            });
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(BirthDetailsError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(BirthDetailsError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}
