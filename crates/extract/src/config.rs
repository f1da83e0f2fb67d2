//! Configuration for one extraction run.

use crate::error::ExtractError;
use crate::lexer::LexerConfig;
use crate::slot::SlotTimeTable;

/// Immutable settings for [`extract_schedule`](crate::extract_schedule).
///
/// # Example
///
/// ```
/// use schedsync_extract::ExtractConfig;
///
/// let config = ExtractConfig::new("ББИ-25-2").with_marker_column(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    group_label: String,
    marker_column: usize,
    slots: SlotTimeTable,
    lexer: LexerConfig,
}

impl ExtractConfig {
    /// Creates a configuration for `group_label`.
    ///
    /// Defaults: marker column 1, the seven-slot default table, default
    /// lexer markers.
    pub fn new(group_label: impl Into<String>) -> Self {
        Self {
            group_label: group_label.into(),
            marker_column: 1,
            slots: SlotTimeTable::default(),
            lexer: LexerConfig::default(),
        }
    }

    /// Sets the column scanned for lesson markers.
    pub fn with_marker_column(mut self, column: usize) -> Self {
        self.marker_column = column;
        self
    }

    /// Sets the slot time table.
    pub fn with_slots(mut self, slots: SlotTimeTable) -> Self {
        self.slots = slots;
        self
    }

    /// Sets the lexer markers.
    pub fn with_lexer(mut self, lexer: LexerConfig) -> Self {
        self.lexer = lexer;
        self
    }

    /// Group label searched for in the grid.
    pub fn group_label(&self) -> &str {
        &self.group_label
    }

    /// Marker column index.
    pub fn marker_column(&self) -> usize {
        self.marker_column
    }

    /// Slot time table.
    pub fn slots(&self) -> &SlotTimeTable {
        &self.slots
    }

    /// Lexer markers.
    pub fn lexer(&self) -> &LexerConfig {
        &self.lexer
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidConfig`] if the group label is blank or
    /// the slot table is empty.
    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.group_label.trim().is_empty() {
            return Err(ExtractError::InvalidConfig {
                reason: "group label must not be blank".to_string(),
            });
        }
        if self.slots.is_empty() {
            return Err(ExtractError::InvalidConfig {
                reason: "slot time table must define at least one slot".to_string(),
            });
        }
        Ok(())
    }
}
