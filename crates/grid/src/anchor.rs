//! Lesson-index marker scan.

use tracing::debug;

use crate::error::GridError;
use crate::grid::Grid;

/// Smallest lesson number a marker cell may hold.
pub const MIN_LESSON: u8 = 1;

/// Largest lesson number a marker cell may hold.
pub const MAX_LESSON: u8 = 7;

/// A row whose marker-column cell holds a lesson index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorPosition {
    /// Grid row of the marker.
    pub row: usize,
    /// Lesson number in `MIN_LESSON..=MAX_LESSON`.
    pub lesson: u8,
}

/// Parses a marker cell into a lesson number.
///
/// Accepts a trimmed integer in `1..=7`. Integral decimals such as `"3.0"`
/// are accepted too, since spreadsheet decoders render numeric cells that
/// way.
pub fn parse_lesson_marker(text: &str) -> Option<u8> {
    let text = text.trim();
    let value = match text.parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            let f = text.parse::<f64>().ok()?;
            if !f.is_finite() || f.fract() != 0.0 {
                return None;
            }
            f as i64
        }
    };
    if (i64::from(MIN_LESSON)..=i64::from(MAX_LESSON)).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}

/// Scans `marker_col` top to bottom and returns every anchor in row order.
///
/// # Errors
///
/// Returns [`GridError::NoAnchorsFound`] when the column holds no marker,
/// including when `marker_col` lies outside the grid. This is the main
/// signal that the sheet does not follow the expected layout.
pub fn locate_anchors(grid: &Grid, marker_col: usize) -> Result<Vec<AnchorPosition>, GridError> {
    let anchors: Vec<AnchorPosition> = grid
        .column(marker_col)
        .enumerate()
        .filter_map(|(row, text)| parse_lesson_marker(text).map(|lesson| AnchorPosition { row, lesson }))
        .collect();

    if anchors.is_empty() {
        return Err(GridError::NoAnchorsFound { column: marker_col });
    }

    debug!(
        column = marker_col,
        n_anchors = anchors.len(),
        "lesson markers located"
    );
    Ok(anchors)
}
