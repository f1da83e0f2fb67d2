//! # schedsync-calendar
//!
//! Semester calendar generation from extracted lessons.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["ScheduleEntry"] -->|"materialize()"| B["CalendarEvent"]
//!     C["CalendarConfig"] --> B
//!     B -->|"parity all"| D["weekly RRULE until semester end"]
//!     B -->|"parity odd/even"| E["one event per matching week"]
//!     B -->|"to_ics()"| F["iCalendar text"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::{NaiveDate, Utc};
//! use schedsync_calendar::{CalendarConfig, materialize, to_ics};
//!
//! let cfg = CalendarConfig::new(
//!     NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
//! );
//! let events = materialize(&entries, &cfg)?;
//! let ics = to_ics(&events, &cfg, Utc::now());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Semester window, timezone and naming |
//! | `event` | Calendar event and recurrence model |
//! | `materialize` | Entry to event expansion and week arithmetic |
//! | `ics` | RFC 5545 serialization via `ical` |
//! | `error` | Error types |

mod config;
mod error;
mod event;
mod ics;
mod materialize;

pub use config::CalendarConfig;
pub use error::CalendarError;
pub use event::{CalendarEvent, Recurrence};
pub use ics::{PRODID, to_ics};
pub use materialize::{first_occurrence, materialize, week_number};
