//! Pipeline stage labels for failure reporting.

use std::fmt;

/// Step of the pipeline a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Discover,
    Fetch,
    Read,
    Extract,
    Materialize,
    Write,
    Fingerprint,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Discover => "discover",
            Self::Fetch => "fetch",
            Self::Read => "read",
            Self::Extract => "extract",
            Self::Materialize => "materialize",
            Self::Write => "write",
            Self::Fingerprint => "fingerprint",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure tagged with the stage it happened in.
///
/// Displays as `"{stage}: {cause}"` with the full cause chain.
#[derive(Debug)]
pub struct StageError {
    pub stage: Stage,
    pub cause: anyhow::Error,
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:#}", self.stage, self.cause)
    }
}

impl std::error::Error for StageError {}

/// Attaches a [`Stage`] to an error.
pub trait AtStage<T> {
    fn at(self, stage: Stage) -> Result<T, StageError>;
}

impl<T, E> AtStage<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn at(self, stage: Stage) -> Result<T, StageError> {
        self.map_err(|e| StageError {
            stage,
            cause: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Context, anyhow};

    use super::*;

    #[test]
    fn display_includes_stage_and_chain() {
        let res: Result<(), anyhow::Error> = Err(anyhow!("connection refused")).context("GET failed");
        let err = res.at(Stage::Fetch).unwrap_err();
        assert_eq!(err.to_string(), "fetch: GET failed: connection refused");
    }

    #[test]
    fn library_errors_convert() {
        let res: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
        let err = res.at(Stage::Write).unwrap_err();
        assert_eq!(err.stage, Stage::Write);
        assert_eq!(err.to_string(), "write: disk full");
    }
}
