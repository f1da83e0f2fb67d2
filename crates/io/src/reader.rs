//! Workbook decoding into a [`Grid`].

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use schedsync_grid::Grid;
use tracing::{debug, info};

use crate::error::IoError;

/// Reads one worksheet of the workbook at `path`.
///
/// The format (`.xls`, `.xlsx`, `.xlsb`, `.ods`) is picked from the file
/// extension. `sheet` names the worksheet; `None` selects the first one.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist, and
/// [`IoError::Workbook`], [`IoError::NoSheets`] or [`IoError::SheetNotFound`]
/// when the workbook cannot be decoded or lacks the sheet.
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<Grid, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    info!(path = %path.display(), "reading workbook");
    let mut workbook = open_workbook_auto(path)?;
    read_sheet(&mut workbook, sheet)
}

/// Reads one worksheet from an in-memory workbook, e.g. a downloaded file.
///
/// The format is sniffed from the content.
///
/// # Errors
///
/// Same as [`read_workbook`], minus the missing-file case.
pub fn read_workbook_bytes(bytes: Vec<u8>, sheet: Option<&str>) -> Result<Grid, IoError> {
    info!(n_bytes = bytes.len(), "reading workbook from memory");
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    read_sheet(&mut workbook, sheet)
}

fn read_sheet<RS: Read + Seek>(
    workbook: &mut Sheets<RS>,
    sheet: Option<&str>,
) -> Result<Grid, IoError> {
    let names = workbook.sheet_names();
    let name = match sheet {
        Some(wanted) => names
            .iter()
            .find(|n| n.as_str() == wanted)
            .cloned()
            .ok_or_else(|| IoError::SheetNotFound {
                name: wanted.to_string(),
                available: names.join(", "),
            })?,
        None => names.first().cloned().ok_or(IoError::NoSheets)?,
    };

    let range = workbook.worksheet_range(&name)?;
    let grid = grid_from_range(&range);
    debug!(
        sheet = %name,
        n_rows = grid.n_rows(),
        n_cols = grid.n_cols(),
        "worksheet decoded"
    );
    Ok(grid)
}

/// Converts a decoded range into a [`Grid`] in absolute sheet coordinates.
///
/// Rows and columns before the range's first used cell are filled with
/// blanks, so `grid.cell(r, c)` addresses the same cell as the sheet does.
pub fn grid_from_range(range: &Range<Data>) -> Grid {
    let Some((row0, col0)) = range.start() else {
        return Grid::from_rows(Vec::<Vec<String>>::new());
    };
    let row0 = row0 as usize;
    let col0 = col0 as usize;

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); row0];
    for source in range.rows() {
        let mut row = vec![String::new(); col0];
        row.extend(source.iter().map(cell_text));
        rows.push(row);
    }
    Grid::from_rows(rows)
}

/// Text form of one cell.
///
/// Integral numbers print without a fractional part so lesson markers
/// stored as `1.0` read as `"1"`. Errors and empty cells are blank.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", *f as i64)
        }
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}
