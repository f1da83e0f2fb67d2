//! Day-of-week inference over the ordered anchor list.
//!
//! The sheet carries no day labels the extractor can rely on, so days are
//! inferred from the lesson-number sequence with one rule:
//!
//! - the first anchor opens day 0 (Monday),
//! - an anchor with lesson number 1 opens the next day,
//! - any other anchor must have a larger lesson number than the previous
//!   anchor of the same day.
//!
//! Anything else is reported as a parse anomaly instead of being mapped to
//! a guessed day.

use chrono::Weekday;
use schedsync_grid::AnchorPosition;

use crate::error::ExtractError;

/// Number of days the resolver can assign.
pub const DAYS_PER_WEEK: u8 = 7;

/// An anchor with its inferred day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedAnchor {
    /// Grid row of the marker.
    pub row: usize,
    /// Lesson number on that row.
    pub lesson: u8,
    /// Day index, 0 = Monday .. 6 = Sunday.
    pub day: u8,
}

impl ResolvedAnchor {
    /// The inferred day as a [`Weekday`].
    pub fn weekday(&self) -> Weekday {
        weekday_from_index(self.day)
    }
}

/// State of the day resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    /// No anchor seen yet.
    AwaitingDayStart,
    /// Inside the run of anchors for `day`.
    InDayRun {
        /// Current day index.
        day: u8,
        /// Lesson number of the last anchor accepted into this day.
        last_lesson: u8,
    },
}

/// Explicit state machine assigning days to anchors one at a time.
#[derive(Debug, Clone)]
pub struct DayResolver {
    state: DayState,
}

impl Default for DayResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DayResolver {
    /// Creates a resolver in [`DayState::AwaitingDayStart`].
    pub fn new() -> Self {
        Self {
            state: DayState::AwaitingDayStart,
        }
    }

    /// Current state.
    pub fn state(&self) -> DayState {
        self.state
    }

    /// Feeds the next anchor and returns it with its day.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::DayRunAnomaly`] when a lesson number other than 1
    ///   does not exceed the previous one in the current day.
    /// - [`ExtractError::TooManyDays`] when a lesson-1 anchor would open an
    ///   eighth day.
    ///
    /// The state is left unchanged on error.
    pub fn advance(&mut self, anchor: AnchorPosition) -> Result<ResolvedAnchor, ExtractError> {
        let day = match self.state {
            DayState::AwaitingDayStart => 0,
            DayState::InDayRun { day, .. } if anchor.lesson == 1 => {
                if day + 1 >= DAYS_PER_WEEK {
                    return Err(ExtractError::TooManyDays { row: anchor.row });
                }
                day + 1
            }
            DayState::InDayRun { day, last_lesson } if anchor.lesson > last_lesson => day,
            DayState::InDayRun { last_lesson, .. } => {
                return Err(ExtractError::DayRunAnomaly {
                    row: anchor.row,
                    lesson: anchor.lesson,
                    previous: last_lesson,
                });
            }
        };

        self.state = DayState::InDayRun {
            day,
            last_lesson: anchor.lesson,
        };
        Ok(ResolvedAnchor {
            row: anchor.row,
            lesson: anchor.lesson,
            day,
        })
    }
}

/// Resolves every anchor in order.
///
/// # Errors
///
/// Propagates the first error from [`DayResolver::advance`].
pub fn resolve_days(anchors: &[AnchorPosition]) -> Result<Vec<ResolvedAnchor>, ExtractError> {
    let mut resolver = DayResolver::new();
    anchors.iter().map(|&a| resolver.advance(a)).collect()
}

/// Maps a day index (0 = Monday) to a [`Weekday`], wrapping modulo 7.
pub fn weekday_from_index(day: u8) -> Weekday {
    match day % DAYS_PER_WEEK {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors(lessons: &[u8]) -> Vec<AnchorPosition> {
        lessons
            .iter()
            .enumerate()
            .map(|(row, &lesson)| AnchorPosition { row, lesson })
            .collect()
    }

    fn days(lessons: &[u8]) -> Vec<u8> {
        resolve_days(&anchors(lessons))
            .unwrap()
            .iter()
            .map(|r| r.day)
            .collect()
    }

    #[test]
    fn full_days_split_on_lesson_one() {
        assert_eq!(
            days(&[1, 2, 3, 4, 5, 6, 7, 1, 2]),
            [0, 0, 0, 0, 0, 0, 0, 1, 1]
        );
    }

    #[test]
    fn short_days_split_on_lesson_one() {
        assert_eq!(days(&[1, 2, 3, 1, 2, 1]), [0, 0, 0, 1, 1, 2]);
    }

    #[test]
    fn gaps_inside_a_day_are_allowed() {
        assert_eq!(days(&[1, 3, 6, 1, 4]), [0, 0, 0, 1, 1]);
    }

    #[test]
    fn first_day_may_start_late() {
        assert_eq!(days(&[2, 3, 1]), [0, 0, 1]);
    }

    #[test]
    fn non_increasing_lesson_is_anomaly() {
        let err = resolve_days(&anchors(&[1, 2, 3, 2])).unwrap_err();
        assert_eq!(
            err,
            ExtractError::DayRunAnomaly {
                row: 3,
                lesson: 2,
                previous: 3
            }
        );
    }

    #[test]
    fn repeated_lesson_is_anomaly() {
        assert!(matches!(
            resolve_days(&anchors(&[1, 4, 4])),
            Err(ExtractError::DayRunAnomaly { row: 2, .. })
        ));
    }

    #[test]
    fn eighth_day_is_rejected() {
        let err = resolve_days(&anchors(&[1, 1, 1, 1, 1, 1, 1, 1])).unwrap_err();
        assert_eq!(err, ExtractError::TooManyDays { row: 7 });
    }

    #[test]
    fn seven_days_are_accepted() {
        assert_eq!(days(&[1, 1, 1, 1, 1, 1, 1]), [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn state_transitions() {
        let mut r = DayResolver::new();
        assert_eq!(r.state(), DayState::AwaitingDayStart);
        r.advance(AnchorPosition { row: 0, lesson: 1 }).unwrap();
        assert_eq!(
            r.state(),
            DayState::InDayRun {
                day: 0,
                last_lesson: 1
            }
        );
        r.advance(AnchorPosition { row: 1, lesson: 5 }).unwrap();
        r.advance(AnchorPosition { row: 2, lesson: 1 }).unwrap();
        assert_eq!(
            r.state(),
            DayState::InDayRun {
                day: 1,
                last_lesson: 1
            }
        );
    }

    #[test]
    fn state_unchanged_after_error() {
        let mut r = DayResolver::new();
        r.advance(AnchorPosition { row: 0, lesson: 3 }).unwrap();
        assert!(r.advance(AnchorPosition { row: 1, lesson: 2 }).is_err());
        assert_eq!(
            r.state(),
            DayState::InDayRun {
                day: 0,
                last_lesson: 3
            }
        );
    }

    #[test]
    fn weekday_mapping() {
        assert_eq!(weekday_from_index(0), Weekday::Mon);
        assert_eq!(weekday_from_index(6), Weekday::Sun);
        let r = ResolvedAnchor {
            row: 0,
            lesson: 1,
            day: 2,
        };
        assert_eq!(r.weekday(), Weekday::Wed);
    }
}
