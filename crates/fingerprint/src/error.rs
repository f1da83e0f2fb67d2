//! Error types for the schedsync-fingerprint crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the schedsync-fingerprint crate.
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    /// Returned when the stored fingerprint cannot be read.
    #[error("failed to read fingerprint from {path}: {source}")]
    Read {
        /// Path of the fingerprint file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the fingerprint cannot be written.
    #[error("failed to write fingerprint to {path}: {source}")]
    Write {
        /// Path of the fingerprint file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_read() {
        let err = FingerprintError::Read {
            path: PathBuf::from("state/fp.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read fingerprint from state/fp.txt: denied"
        );
    }

    #[test]
    fn display_write() {
        let err = FingerprintError::Write {
            path: PathBuf::from("fp.txt"),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(err.to_string(), "failed to write fingerprint to fp.txt: disk full");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<FingerprintError>();
    }
}
