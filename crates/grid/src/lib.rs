//! # schedsync-grid
//!
//! A uniform, immutable `(row, column) -> text` view over one timetable sheet,
//! plus the two locators that anchor extraction: the group column and the
//! lesson-marker rows.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["rows of cell text"] -->|"Grid::from_rows()"| B["Grid"]
//!     B -->|"locate_group()"| C["GroupPosition"]
//!     B -->|"locate_anchors()"| D["Vec of AnchorPosition"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use schedsync_grid::{Grid, locate_anchors, locate_group};
//!
//! let grid = Grid::from_rows(vec![
//!     vec!["", "", "ББИ-25-2"],
//!     vec!["", "1", "Математика"],
//!     vec!["", "2", ""],
//! ]);
//!
//! let group = locate_group(&grid, "ББИ-25-2").unwrap();
//! assert_eq!(group.col, 2);
//!
//! let anchors = locate_anchors(&grid, 1).unwrap();
//! assert_eq!(anchors.len(), 2);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `grid` | Rectangular cell table with blank normalization |
//! | `group` | First-match group label search |
//! | `anchor` | Lesson-index marker scan over one column |
//! | `error` | Error types |

mod anchor;
mod error;
mod grid;
mod group;

pub use anchor::{AnchorPosition, MAX_LESSON, MIN_LESSON, locate_anchors, parse_lesson_marker};
pub use error::GridError;
pub use grid::Grid;
pub use group::{GroupPosition, locate_group};
