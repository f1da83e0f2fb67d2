//! Typed lesson records.

use std::fmt;

use chrono::{NaiveTime, TimeDelta, Weekday};
use serde::Serialize;

use crate::day::weekday_from_index;

/// Kind of lesson, read from a bracketed marker in the cell text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    /// Lecture.
    Lecture,
    /// Seminar / practical class.
    Practice,
    /// Laboratory work.
    Lab,
    /// No marker present.
    #[default]
    Generic,
}

impl LessonType {
    /// Human-readable label used in event titles and descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Self::Lecture => "Лекционные",
            Self::Practice => "Практические",
            Self::Lab => "Лабораторные",
            Self::Generic => "Занятие",
        }
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which weeks of the semester a lesson takes place in.
///
/// Weeks are numbered from 1, starting with the week that contains the
/// semester start; week 1 is odd.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekParity {
    /// Every week.
    #[default]
    All,
    /// Weeks 1, 3, 5, ...
    Odd,
    /// Weeks 2, 4, 6, ...
    Even,
}

impl WeekParity {
    /// Returns `true` if a lesson with this parity runs in `week` (1-based).
    pub fn includes_week(self, week: u32) -> bool {
        match self {
            Self::All => true,
            Self::Odd => week % 2 == 1,
            Self::Even => week % 2 == 0,
        }
    }
}

impl fmt::Display for WeekParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Odd => "odd",
            Self::Even => "even",
        })
    }
}

/// One extracted lesson.
///
/// Created once per occupied `(anchor row, group column)` cell. Entries
/// keep grid scan order and are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    /// Subject name.
    pub subject: String,
    /// Lesson kind.
    pub kind: LessonType,
    /// Teacher as "Surname X.Y.", if found.
    pub teacher: Option<String>,
    /// Room code, if found.
    pub room: Option<String>,
    /// Day index, 0 = Monday .. 6 = Sunday.
    pub day: u8,
    /// Lesson number, 1..=7.
    pub lesson: u8,
    /// Slot start time.
    pub start_time: NaiveTime,
    /// Slot length in minutes.
    pub duration_minutes: u32,
    /// Week parity.
    pub parity: WeekParity,
}

impl ScheduleEntry {
    /// The entry's day as a [`Weekday`].
    pub fn weekday(&self) -> Weekday {
        weekday_from_index(self.day)
    }

    /// Slot end time.
    pub fn end_time(&self) -> NaiveTime {
        self.start_time + TimeDelta::minutes(i64::from(self.duration_minutes))
    }
}
