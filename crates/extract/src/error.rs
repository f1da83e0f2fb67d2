//! Error types for schedsync-extract.

use schedsync_grid::GridError;

/// Error type for all fallible operations in the schedsync-extract crate.
///
/// Every variant is terminal for an extraction run: no partial schedule is
/// ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// A locator failed: the group label or the lesson markers are missing.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Returned when a lesson number has no entry in the slot time table.
    #[error("unknown lesson number: {lesson}")]
    UnknownLessonNumber {
        /// The lesson number that could not be resolved.
        lesson: u8,
    },

    /// Returned when a marker breaks the "lesson numbers increase within a
    /// day, 1 starts a new day" rule.
    #[error("day run anomaly at row {row}: lesson {lesson} follows lesson {previous}")]
    DayRunAnomaly {
        /// Grid row of the offending marker.
        row: usize,
        /// Lesson number found on that row.
        lesson: u8,
        /// Lesson number of the preceding marker in the same day.
        previous: u8,
    },

    /// Returned when the markers describe more than seven days.
    #[error("marker at row {row} starts an eighth day")]
    TooManyDays {
        /// Grid row of the marker that would open the eighth day.
        row: usize,
    },

    /// Returned when a slot time table entry is malformed.
    #[error("invalid slot {lesson}: {reason}")]
    InvalidSlot {
        /// Lesson number of the slot.
        lesson: u8,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the extraction configuration is inconsistent.
    #[error("invalid extraction config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a well-formed grid yields no lessons for the group.
    #[error("no lessons extracted for group '{group}'")]
    EmptyExtraction {
        /// The group label that was extracted.
        group: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_grid_is_transparent() {
        let err: ExtractError = GridError::NoAnchorsFound { column: 1 }.into();
        assert_eq!(
            err.to_string(),
            "no lesson markers (1..=7) found in column 1"
        );
    }

    #[test]
    fn display_unknown_lesson() {
        let err = ExtractError::UnknownLessonNumber { lesson: 7 };
        assert_eq!(err.to_string(), "unknown lesson number: 7");
    }

    #[test]
    fn display_day_run_anomaly() {
        let err = ExtractError::DayRunAnomaly {
            row: 12,
            lesson: 3,
            previous: 5,
        };
        assert_eq!(
            err.to_string(),
            "day run anomaly at row 12: lesson 3 follows lesson 5"
        );
    }

    #[test]
    fn display_too_many_days() {
        let err = ExtractError::TooManyDays { row: 40 };
        assert_eq!(err.to_string(), "marker at row 40 starts an eighth day");
    }

    #[test]
    fn display_empty_extraction() {
        let err = ExtractError::EmptyExtraction {
            group: "ББИ-25-2".to_string(),
        };
        assert_eq!(err.to_string(), "no lessons extracted for group 'ББИ-25-2'");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<ExtractError>();
    }
}
