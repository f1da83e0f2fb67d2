//! Integration tests: group and marker locators over a realistic sheet layout.

use schedsync_grid::{AnchorPosition, Grid, GridError, locate_anchors, locate_group};

/// Two days, three lesson rows each, with a header row and a day label column.
fn weekly_sheet() -> Grid {
    Grid::from_rows(vec![
        vec!["День", "Пара", "Время", "ББИ-25-1", "ББИ-25-2"],
        vec!["Понедельник", "1", "09:00-10:35", "Физика", "Математика"],
        vec!["", "2", "10:50-12:25", "", ""],
        vec!["", "3", "12:40-14:15", "История", ""],
        vec!["Вторник", "1", "09:00-10:35", "", "Экономика"],
        vec!["", "2", "10:50-12:25", "", ""],
        vec!["", "3", "12:40-14:15", "", "Право"],
    ])
}

#[test]
fn group_column_and_anchor_rows_line_up() {
    let grid = weekly_sheet();
    let group = locate_group(&grid, "ББИ-25-2").unwrap();
    let anchors = locate_anchors(&grid, 1).unwrap();

    assert_eq!(group.col, 4);
    assert_eq!(anchors.len(), 6);

    let occupied: Vec<&str> = anchors
        .iter()
        .map(|a| grid.cell(a.row, group.col))
        .filter(|s| !s.is_empty())
        .collect();
    assert_eq!(occupied, ["Математика", "Экономика", "Право"]);
}

#[test]
fn header_text_in_marker_column_is_ignored() {
    let grid = weekly_sheet();
    let anchors = locate_anchors(&grid, 1).unwrap();
    assert_eq!(anchors[0], AnchorPosition { row: 1, lesson: 1 });
}

#[test]
fn wrong_marker_column_aborts() {
    let grid = weekly_sheet();
    // The time column never parses as a lone lesson index.
    assert_eq!(
        locate_anchors(&grid, 2).unwrap_err(),
        GridError::NoAnchorsFound { column: 2 }
    );
}

#[test]
fn locators_are_deterministic() {
    let grid = weekly_sheet();
    assert_eq!(
        locate_anchors(&grid, 1).unwrap(),
        locate_anchors(&grid, 1).unwrap()
    );
    assert_eq!(
        locate_group(&grid, "ББИ-25-1").unwrap(),
        locate_group(&grid, "ББИ-25-1").unwrap()
    );
}
