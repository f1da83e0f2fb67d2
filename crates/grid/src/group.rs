//! Group label search.

use tracing::debug;

use crate::error::GridError;
use crate::grid::Grid;

/// Position of the cell holding the group label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupPosition {
    /// Row of the label cell.
    pub row: usize,
    /// Column of the label cell; lessons for the group are read from it.
    pub col: usize,
}

/// Finds the first cell, in row-major order, whose text contains `label`.
///
/// First match wins. A label that appears more than once is not
/// disambiguated.
///
/// # Errors
///
/// Returns [`GridError::GroupNotFound`] when no cell matches or `label` is
/// blank.
pub fn locate_group(grid: &Grid, label: &str) -> Result<GroupPosition, GridError> {
    let needle = label.trim();
    if needle.is_empty() {
        return Err(GridError::GroupNotFound {
            label: label.to_string(),
        });
    }

    grid.iter_cells()
        .find(|(_, _, text)| text.contains(needle))
        .map(|(row, col, _)| {
            debug!(row, col, label = needle, "group label located");
            GroupPosition { row, col }
        })
        .ok_or_else(|| GridError::GroupNotFound {
            label: needle.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_rows(vec![
            vec!["Расписание", "", "", ""],
            vec!["", "", "ББИ-25-1", "ББИ-25-2 (подгруппа)"],
            vec!["", "1", "", ""],
        ])
    }

    #[test]
    fn substring_match() {
        let pos = locate_group(&grid(), "ББИ-25-2").unwrap();
        assert_eq!(pos, GroupPosition { row: 1, col: 3 });
    }

    #[test]
    fn first_match_wins() {
        let grid = Grid::from_rows(vec![vec!["", "G-1"], vec!["G-1", ""]]);
        let pos = locate_group(&grid, "G-1").unwrap();
        assert_eq!(pos, GroupPosition { row: 0, col: 1 });
    }

    #[test]
    fn label_is_trimmed() {
        let pos = locate_group(&grid(), "  ББИ-25-1 ").unwrap();
        assert_eq!(pos.col, 2);
    }

    #[test]
    fn missing_label() {
        assert_eq!(
            locate_group(&grid(), "ББИ-99-9").unwrap_err(),
            GridError::GroupNotFound {
                label: "ББИ-99-9".to_string()
            }
        );
    }

    #[test]
    fn blank_label_never_matches() {
        assert!(matches!(
            locate_group(&grid(), "   "),
            Err(GridError::GroupNotFound { .. })
        ));
    }
}
