//! Lesson-number to clock-time mapping.

use std::collections::BTreeMap;

use chrono::NaiveTime;
use schedsync_grid::{MAX_LESSON, MIN_LESSON};

use crate::error::ExtractError;

/// Start and end clock times of one lesson slot.
///
/// The end is always strictly after the start, so [`duration_minutes`]
/// is a positive whole number of minutes.
///
/// [`duration_minutes`]: SlotTime::duration_minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotTime {
    start: NaiveTime,
    end: NaiveTime,
}

impl SlotTime {
    /// Creates a slot for `lesson`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidSlot`] if `end` is not after `start`.
    pub fn new(lesson: u8, start: NaiveTime, end: NaiveTime) -> Result<Self, ExtractError> {
        if end <= start {
            return Err(ExtractError::InvalidSlot {
                lesson,
                reason: format!("end {end} is not after start {start}"),
            });
        }
        Ok(Self { start, end })
    }

    /// Slot start.
    pub fn start(self) -> NaiveTime {
        self.start
    }

    /// Slot end.
    pub fn end(self) -> NaiveTime {
        self.end
    }

    /// Whole minutes between start and end.
    pub fn duration_minutes(self) -> u32 {
        (self.end - self.start).num_minutes() as u32
    }
}

/// Fixed mapping from lesson number to [`SlotTime`].
///
/// A table may define fewer than seven slots; looking up a missing lesson
/// fails with [`ExtractError::UnknownLessonNumber`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTimeTable {
    slots: BTreeMap<u8, SlotTime>,
}

impl SlotTimeTable {
    /// Builds a table from `(lesson, slot)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidSlot`] for a lesson number outside
    /// `1..=7` or one that appears twice.
    pub fn new(slots: impl IntoIterator<Item = (u8, SlotTime)>) -> Result<Self, ExtractError> {
        let mut map = BTreeMap::new();
        for (lesson, slot) in slots {
            if !(MIN_LESSON..=MAX_LESSON).contains(&lesson) {
                return Err(ExtractError::InvalidSlot {
                    lesson,
                    reason: format!("lesson number must be {MIN_LESSON}..={MAX_LESSON}"),
                });
            }
            if map.insert(lesson, slot).is_some() {
                return Err(ExtractError::InvalidSlot {
                    lesson,
                    reason: "defined more than once".to_string(),
                });
            }
        }
        Ok(Self { slots: map })
    }

    /// Looks up the slot for `lesson`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::UnknownLessonNumber`] when the table has no
    /// entry for `lesson`.
    pub fn get(&self, lesson: u8) -> Result<SlotTime, ExtractError> {
        self.slots
            .get(&lesson)
            .copied()
            .ok_or(ExtractError::UnknownLessonNumber { lesson })
    }

    /// Number of defined slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when no slot is defined.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over `(lesson, slot)` in lesson order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, SlotTime)> + '_ {
        self.slots.iter().map(|(&l, &s)| (l, s))
    }
}

impl Default for SlotTimeTable {
    /// The seven-slot weekday grid: 95-minute pairs from 09:00, the last two
    /// shortened to 85 minutes.
    fn default() -> Self {
        const TABLE: [(u8, (u32, u32), (u32, u32)); 7] = [
            (1, (9, 0), (10, 35)),
            (2, (10, 50), (12, 25)),
            (3, (12, 40), (14, 15)),
            (4, (14, 30), (16, 5)),
            (5, (16, 20), (17, 55)),
            (6, (18, 0), (19, 25)),
            (7, (19, 35), (21, 0)),
        ];
        let slots = TABLE
            .iter()
            .map(|&(lesson, (sh, sm), (eh, em))| {
                let start = NaiveTime::from_hms_opt(sh, sm, 0).expect("static slot start is valid");
                let end = NaiveTime::from_hms_opt(eh, em, 0).expect("static slot end is valid");
                (lesson, SlotTime { start, end })
            })
            .collect();
        Self { slots }
    }
}
