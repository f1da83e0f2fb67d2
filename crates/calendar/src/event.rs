//! Calendar event model.

use chrono::{DateTime, FixedOffset, Utc};

/// How an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recurrence {
    /// Every week on the start's weekday, up to and including `until`.
    Weekly {
        /// Last instant an occurrence may start at.
        until: DateTime<Utc>,
    },
}

/// One timed calendar event derived from a schedule entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Stable unique identifier.
    pub uid: String,
    /// `"{subject} ({type})"`.
    pub title: String,
    /// Room or fallback location.
    pub location: Option<String>,
    /// Start instant in the civil timezone.
    pub start: DateTime<FixedOffset>,
    /// End instant in the civil timezone.
    pub end: DateTime<FixedOffset>,
    /// Teacher, type and room lines.
    pub description: String,
    /// Repetition rule; `None` for a single occurrence.
    pub recurrence: Option<Recurrence>,
}

impl CalendarEvent {
    /// Returns `true` for a repeating event.
    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }
}
