//! Rectangular cell table.

/// Immutable rectangular table of cell text.
///
/// Cells are stored row-major. Whitespace-only cells are normalized to the
/// empty string at construction; everything else is kept verbatim so that
/// downstream lexing sees the original text. Indices are 0-based and stay
/// stable for the lifetime of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<String>,
    n_rows: usize,
    n_cols: usize,
}

impl Grid {
    /// Builds a grid from ragged rows.
    ///
    /// The column count is the length of the longest row; shorter rows are
    /// padded with empty cells.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(|s| normalize(s.into())).collect())
            .collect();

        let n_rows = rows.len();
        let n_cols = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for mut row in rows {
            row.resize(n_cols, String::new());
            cells.extend(row);
        }

        Self {
            cells,
            n_rows,
            n_cols,
        }
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns `true` when the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Text of the cell at `(row, col)`, or `""` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        if row >= self.n_rows || col >= self.n_cols {
            return "";
        }
        &self.cells[row * self.n_cols + col]
    }

    /// Iterates over one row's cells, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &str> {
        let cols = if row < self.n_rows { self.n_cols } else { 0 };
        (0..cols).map(move |c| self.cell(row, c))
    }

    /// Iterates over one column's cells, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> {
        let rows = if col < self.n_cols { self.n_rows } else { 0 };
        (0..rows).map(move |r| self.cell(r, col))
    }

    /// Iterates over every cell in row-major order as `(row, col, text)`.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.cells.iter().enumerate().map(move |(i, s)| {
            let (row, col) = (i / self.n_cols, i % self.n_cols);
            (row, col, s.as_str())
        })
    }
}

fn normalize(s: String) -> String {
    if s.trim().is_empty() { String::new() } else { s }
}
