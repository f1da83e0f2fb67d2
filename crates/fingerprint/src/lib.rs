//! # schedsync-fingerprint
//!
//! Change detection for extracted schedules.
//!
//! A schedule is reduced to one `subject|day|HH:MM|room` line per entry and
//! hashed with SHA-256. The digest is kept in a plain-text file between runs;
//! comparing it with the fresh one yields a [`ChangeStatus`].
//!
//! ```ignore
//! use schedsync_fingerprint::{ChangeStatus, FingerprintStore, fingerprint};
//!
//! let store = FingerprintStore::new("state/fingerprint.txt");
//! let current = fingerprint(&entries);
//! let status = ChangeStatus::compare(store.load()?.as_ref(), &current);
//! if status.is_update() {
//!     store.save(&current)?;
//! }
//! ```

mod digest;
mod error;
mod store;

pub use digest::{Fingerprint, canonicalize, fingerprint};
pub use error::FingerprintError;
pub use store::{ChangeStatus, FingerprintStore};
