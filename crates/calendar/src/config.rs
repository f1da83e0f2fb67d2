//! Semester window and civil-time settings.

use chrono::{FixedOffset, NaiveDate};

use crate::error::CalendarError;

/// Settings for [`materialize`](crate::materialize) and
/// [`to_ics`](crate::to_ics).
///
/// The civil timezone is a fixed UTC offset paired with the IANA name written
/// to the calendar (`TZID`). Regions that observe daylight saving are not
/// modelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    semester_start: NaiveDate,
    semester_end: NaiveDate,
    timezone: String,
    utc_offset: FixedOffset,
    default_location: Option<String>,
    name: String,
    uid_domain: String,
}

impl CalendarConfig {
    /// Creates a configuration for the inclusive window
    /// `semester_start..=semester_end`.
    ///
    /// Defaults: `Europe/Moscow` at UTC+03:00, no default location,
    /// calendar name `Расписание`, UID domain `schedsync`.
    pub fn new(semester_start: NaiveDate, semester_end: NaiveDate) -> Self {
        Self {
            semester_start,
            semester_end,
            timezone: "Europe/Moscow".to_string(),
            utc_offset: FixedOffset::east_opt(3 * 3600).expect("+03:00 is a valid offset"),
            default_location: None,
            name: "Расписание".to_string(),
            uid_domain: "schedsync".to_string(),
        }
    }

    /// Sets the timezone name and its UTC offset.
    pub fn with_timezone(mut self, name: impl Into<String>, offset: FixedOffset) -> Self {
        self.timezone = name.into();
        self.utc_offset = offset;
        self
    }

    /// Sets the location used for events whose lesson has no room.
    pub fn with_default_location(mut self, location: Option<impl Into<String>>) -> Self {
        self.default_location = location.map(Into::into);
        self
    }

    /// Sets the calendar display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the domain part of generated event UIDs.
    pub fn with_uid_domain(mut self, domain: impl Into<String>) -> Self {
        self.uid_domain = domain.into();
        self
    }

    /// First day of the semester.
    pub fn semester_start(&self) -> NaiveDate {
        self.semester_start
    }

    /// Last day of the semester, inclusive.
    pub fn semester_end(&self) -> NaiveDate {
        self.semester_end
    }

    /// Timezone name written as `TZID`.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// UTC offset of the civil timezone.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Fallback event location.
    pub fn default_location(&self) -> Option<&str> {
        self.default_location.as_deref()
    }

    /// Calendar display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Domain part of event UIDs.
    pub fn uid_domain(&self) -> &str {
        &self.uid_domain
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::InvalidWindow`] if the end precedes the start.
    /// - [`CalendarError::InvalidTimezone`] if the timezone name is blank.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.semester_end < self.semester_start {
            return Err(CalendarError::InvalidWindow {
                start: self.semester_start,
                end: self.semester_end,
            });
        }
        if self.timezone.trim().is_empty() {
            return Err(CalendarError::InvalidTimezone {
                reason: "timezone name must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn defaults() {
        let cfg = CalendarConfig::new(d(2025, 9, 1), d(2025, 12, 31));
        assert_eq!(cfg.timezone(), "Europe/Moscow");
        assert_eq!(cfg.utc_offset().local_minus_utc(), 3 * 3600);
        assert_eq!(cfg.default_location(), None);
        assert_eq!(cfg.uid_domain(), "schedsync");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn single_day_window_is_valid() {
        let cfg = CalendarConfig::new(d(2025, 9, 1), d(2025, 9, 1));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn reversed_window_is_invalid() {
        let cfg = CalendarConfig::new(d(2025, 9, 1), d(2025, 8, 31));
        assert!(matches!(
            cfg.validate(),
            Err(CalendarError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn blank_timezone_is_invalid() {
        let cfg = CalendarConfig::new(d(2025, 9, 1), d(2025, 12, 31))
            .with_timezone(" ", FixedOffset::east_opt(0).unwrap());
        assert!(matches!(
            cfg.validate(),
            Err(CalendarError::InvalidTimezone { .. })
        ));
    }

    #[test]
    fn builder_chaining() {
        let cfg = CalendarConfig::new(d(2025, 9, 1), d(2025, 12, 31))
            .with_timezone("Asia/Yekaterinburg", FixedOffset::east_opt(5 * 3600).unwrap())
            .with_default_location(Some("Главный корпус"))
            .with_name("ББИ-25-2")
            .with_uid_domain("example.org");
        assert_eq!(cfg.timezone(), "Asia/Yekaterinburg");
        assert_eq!(cfg.default_location(), Some("Главный корпус"));
        assert_eq!(cfg.name(), "ББИ-25-2");
        assert_eq!(cfg.uid_domain(), "example.org");
    }
}
