//! # schedsync-io
//!
//! Brings the timetable workbook in and the calendar out. Workbooks are
//! decoded with `calamine` into the [`Grid`](schedsync_grid::Grid) view the
//! extractor works on; remote workbooks are downloaded with a blocking
//! `reqwest` client, optionally after locating the link on the published
//! schedule page with `scraper`. Output files are replaced atomically via
//! `tempfile`.

mod discover;
mod error;
mod fetch;
mod reader;
mod writer;

pub use discover::{DEFAULT_BLOCK, discover_url, find_workbook_link};
pub use error::IoError;
pub use fetch::{fetch_bytes, fetch_text};
pub use reader::{cell_text, grid_from_range, read_workbook, read_workbook_bytes};
pub use writer::write_text;
