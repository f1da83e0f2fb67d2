//! Lesson assembly: locators, day resolver and lexer combined into entries.

use schedsync_grid::{Grid, locate_anchors, locate_group};
use tracing::{debug, info};

use crate::config::ExtractConfig;
use crate::day::{ResolvedAnchor, resolve_days};
use crate::entry::ScheduleEntry;
use crate::error::ExtractError;
use crate::lexer::CellLexer;
use crate::slot::SlotTimeTable;

/// Extracts the schedule of the configured group from `grid`.
///
/// Runs group location, marker location, day resolution and cell lexing in
/// that order. Any stage failure aborts the whole extraction.
///
/// # Errors
///
/// - [`ExtractError::InvalidConfig`] for an invalid configuration.
/// - [`ExtractError::Grid`] when the group or the markers are missing.
/// - [`ExtractError::DayRunAnomaly`] / [`ExtractError::TooManyDays`] when
///   markers break the day rule.
/// - [`ExtractError::UnknownLessonNumber`] when the slot table lacks a
///   lesson that occurs in the grid.
/// - [`ExtractError::EmptyExtraction`] when no occupied cell is found.
pub fn extract_schedule(
    grid: &Grid,
    config: &ExtractConfig,
) -> Result<Vec<ScheduleEntry>, ExtractError> {
    config.validate()?;

    let group = locate_group(grid, config.group_label())?;
    let anchors = locate_anchors(grid, config.marker_column())?;
    let resolved = resolve_days(&anchors)?;
    let lexer = CellLexer::new(config.lexer())?;

    let entries = assemble_entries(grid, group.col, &resolved, &lexer, config.slots())?;
    if entries.is_empty() {
        return Err(ExtractError::EmptyExtraction {
            group: config.group_label().to_string(),
        });
    }

    info!(
        group = config.group_label(),
        n_anchors = resolved.len(),
        n_entries = entries.len(),
        "schedule extracted"
    );
    Ok(entries)
}

/// Builds one entry per occupied `(anchor row, group_col)` cell.
///
/// Entries are appended in anchor order. Two lessons in the same slot both
/// appear; nothing is sorted or merged.
///
/// # Errors
///
/// Returns [`ExtractError::UnknownLessonNumber`] when an occupied cell's
/// lesson number is missing from `slots`.
pub fn assemble_entries(
    grid: &Grid,
    group_col: usize,
    anchors: &[ResolvedAnchor],
    lexer: &CellLexer,
    slots: &SlotTimeTable,
) -> Result<Vec<ScheduleEntry>, ExtractError> {
    let mut entries = Vec::new();
    for anchor in anchors {
        let Some(lex) = lexer.lex(grid.cell(anchor.row, group_col)) else {
            continue;
        };
        let slot = slots.get(anchor.lesson)?;
        debug!(
            row = anchor.row,
            day = anchor.day,
            lesson = anchor.lesson,
            subject = %lex.subject,
            "lesson cell parsed"
        );
        entries.push(ScheduleEntry {
            subject: lex.subject,
            kind: lex.kind,
            teacher: lex.teacher,
            room: lex.room,
            day: anchor.day,
            lesson: anchor.lesson,
            start_time: slot.start(),
            duration_minutes: slot.duration_minutes(),
            parity: lex.parity,
        });
    }
    Ok(entries)
}
