//! Error types for the schedsync-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the schedsync-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the semester ends before it starts.
    #[error("invalid semester window: end {end} is before start {start}")]
    InvalidWindow {
        /// Semester start date.
        start: NaiveDate,
        /// Semester end date.
        end: NaiveDate,
    },

    /// Returned when a timezone label is blank.
    #[error("invalid timezone: {reason}")]
    InvalidTimezone {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a local date and time cannot be placed on the timeline.
    #[error("invalid event time: {reason}")]
    InvalidTime {
        /// Description of the problem.
        reason: String,
    },
}
