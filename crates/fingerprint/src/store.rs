//! On-disk fingerprint persistence and change detection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::digest::Fingerprint;
use crate::error::FingerprintError;

/// Outcome of comparing a fresh fingerprint with the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    /// Nothing was stored yet.
    FirstRun,
    /// The stored digest differs.
    Changed,
    /// The stored digest matches.
    Unchanged,
}

impl ChangeStatus {
    /// Compares `current` against `previous`.
    pub fn compare(previous: Option<&Fingerprint>, current: &Fingerprint) -> Self {
        match previous {
            None => Self::FirstRun,
            Some(prev) if prev == current => Self::Unchanged,
            Some(_) => Self::Changed,
        }
    }

    /// Whether the new fingerprint should be persisted and announced.
    pub fn is_update(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Plain-text file holding exactly one fingerprint.
#[derive(Debug, Clone)]
pub struct FingerprintStore {
    path: PathBuf,
}

impl FingerprintStore {
    /// Creates a store backed by `path`. Nothing is touched until
    /// [`load`](Self::load) or [`save`](Self::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored fingerprint.
    ///
    /// Returns `Ok(None)` when the file does not exist or holds only
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`FingerprintError::Read`] for any other I/O failure.
    pub fn load(&self) -> Result<Option<Fingerprint>, FingerprintError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Fingerprint::from_hex(trimmed)))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored fingerprint");
                Ok(None)
            }
            Err(source) => Err(FingerprintError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Writes `fingerprint` without a trailing newline, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`FingerprintError::Write`] when the directory or file cannot
    /// be written.
    pub fn save(&self, fingerprint: &Fingerprint) -> Result<(), FingerprintError> {
        let write_err = |source| FingerprintError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&self.path, fingerprint.as_str()).map_err(write_err)?;
        debug!(path = %self.path.display(), %fingerprint, "fingerprint saved");
        Ok(())
    }
}
