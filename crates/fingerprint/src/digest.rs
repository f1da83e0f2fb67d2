//! Canonical form and SHA-256 digest of an extracted schedule.

use std::fmt;

use schedsync_extract::ScheduleEntry;
use sha2::{Digest, Sha256};

/// Room placeholder in the canonical form.
const NO_ROOM: &str = "-";

/// Lowercase hex SHA-256 digest of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Wraps an already computed hex digest, e.g. one read from disk.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// The digest as lowercase hex.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `subject|day|HH:MM|room` line per entry, newline-joined, in order.
///
/// Backslash, `|` and line breaks inside text fields are backslash-escaped,
/// so distinct schedules never share a canonical form. A missing room is
/// written as `-`; a room literally named `-` becomes `\-`.
pub fn canonicalize(entries: &[ScheduleEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            let room = match e.room.as_deref() {
                None => NO_ROOM.to_string(),
                Some(NO_ROOM) => format!("\\{NO_ROOM}"),
                Some(room) => escape_field(room),
            };
            format!(
                "{}|{}|{}|{}",
                escape_field(&e.subject),
                e.day,
                e.start_time.format("%H:%M"),
                room
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for ch in field.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '|' => out.push_str("\\|"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

/// Fingerprint of `entries`.
///
/// Only subject, day, start time and room take part; teacher, type and
/// parity changes do not alter the digest. Reordering entries does.
pub fn fingerprint(entries: &[ScheduleEntry]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(canonicalize(entries).as_bytes());
    Fingerprint(hex::encode(hasher.finalize()))
}
