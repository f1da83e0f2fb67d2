//! Error types for the schedsync-grid crate.

/// Error type for the grid locators.
///
/// Both variants mean the sheet does not follow the expected layout and the
/// extraction run should stop before producing any entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Returned when no cell contains the group label.
    #[error("group '{label}' not found in grid")]
    GroupNotFound {
        /// The label that was searched for.
        label: String,
    },

    /// Returned when the marker column holds no lesson-index cell.
    #[error("no lesson markers (1..=7) found in column {column}")]
    NoAnchorsFound {
        /// The marker column that was scanned.
        column: usize,
    },
}
