//! Error types for schedsync-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the schedsync-io crate.
///
/// Covers workbook decoding, sheet selection, HTTP acquisition, workbook
/// link discovery and output file writes.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the spreadsheet decoder.
    #[error("workbook error: {reason}")]
    Workbook {
        /// Description of the underlying decoding failure.
        reason: String,
    },

    /// Returned when a workbook contains no worksheets.
    #[error("workbook has no sheets")]
    NoSheets,

    /// Returned when the requested worksheet is absent.
    #[error("sheet '{name}' not found (available: {available})")]
    SheetNotFound {
        /// Requested sheet name.
        name: String,
        /// Comma-separated names of the sheets that do exist.
        available: String,
    },

    /// Returned when the HTTP request fails before a response arrives.
    #[error("failed to fetch {url}: {reason}")]
    Fetch {
        /// Requested URL.
        url: String,
        /// Description of the transport failure.
        reason: String,
    },

    /// Returned when the server answers with a non-success status.
    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus {
        /// Requested URL.
        url: String,
        /// Numeric HTTP status code.
        status: u16,
    },

    /// Returned when the listing page has no workbook link under the
    /// requested block.
    #[error("no workbook link under '{pattern}' on {url}")]
    LinkNotFound {
        /// Page that was searched.
        url: String,
        /// Block text the link had to sit under.
        pattern: String,
    },

    /// Returned when a page or link URL cannot be parsed or resolved.
    #[error("invalid link '{href}': {reason}")]
    InvalidLink {
        /// Offending URL or `href` value.
        href: String,
        /// Parser message.
        reason: String,
    },

    /// Returned when an output file cannot be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl From<calamine::Error> for IoError {
    fn from(e: calamine::Error) -> Self {
        IoError::Workbook {
            reason: e.to_string(),
        }
    }
}
