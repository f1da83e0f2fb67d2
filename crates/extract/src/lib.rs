//! # schedsync-extract
//!
//! Turns an unannotated timetable grid into typed lesson records.
//!
//! # Pipeline Order
//!
//! 1. **Group Locator**: column of the group label (`schedsync-grid`)
//! 2. **Slot Locator**: rows holding lesson markers 1..=7 (`schedsync-grid`)
//! 3. **Day Resolver**: day-of-week per marker, via [`DayResolver`]
//! 4. **Cell Lexer**: subject, type, teacher, room, parity per cell
//! 5. **Assembler**: [`ScheduleEntry`] per occupied cell, timed by the
//!    [`SlotTimeTable`]
//!
//! Extraction is best-effort and tied to one sheet convention; every stage
//! failure aborts the run with an [`ExtractError`].

mod assemble;
mod config;
mod day;
mod entry;
mod error;
mod lexer;
mod slot;

pub use assemble::{assemble_entries, extract_schedule};
pub use config::ExtractConfig;
pub use day::{DAYS_PER_WEEK, DayResolver, DayState, ResolvedAnchor, resolve_days, weekday_from_index};
pub use entry::{LessonType, ScheduleEntry, WeekParity};
pub use error::ExtractError;
pub use lexer::{CellLexer, LexResult, LexerConfig};
pub use slot::{SlotTime, SlotTimeTable};

// Re-export the grid types callers need to drive extraction.
pub use schedsync_grid::{AnchorPosition, Grid, GridError};
