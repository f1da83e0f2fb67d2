//! Workbook source resolution and loading.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use schedsync_extract::Grid;
use schedsync_io::{discover_url, fetch_bytes, read_workbook, read_workbook_bytes};
use tracing::info;

use crate::cli::SourceArgs;
use crate::config::IoToml;
use crate::stage::{AtStage, Stage, StageError};

/// Where the timetable workbook comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkbookSource {
    Path(PathBuf),
    Url(String),
    /// Link still to be found on a schedule page.
    Page { url: String, block: String },
}

impl fmt::Display for WorkbookSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(p) => write!(f, "{}", p.display()),
            Self::Url(u) => f.write_str(u),
            Self::Page { url, block } => write!(f, "{url} [{block}]"),
        }
    }
}

/// Picks the workbook source: CLI flags first, then `[io].input`, then
/// `[io].source_url`, then discovery on `[io].page_url`.
pub fn resolve(args: &SourceArgs, io: &IoToml) -> Result<WorkbookSource> {
    if let Some(path) = &args.input {
        return Ok(WorkbookSource::Path(path.clone()));
    }
    if let Some(url) = &args.url {
        return Ok(WorkbookSource::Url(url.clone()));
    }
    if let Some(path) = &io.input {
        return Ok(WorkbookSource::Path(path.clone()));
    }
    if let Some(url) = &io.source_url {
        return Ok(WorkbookSource::Url(url.clone()));
    }
    if let Some(url) = &io.page_url {
        return Ok(WorkbookSource::Page {
            url: url.clone(),
            block: io.page_block.clone(),
        });
    }
    bail!(
        "no workbook source: set [io].input, [io].source_url or [io].page_url in config, \
         or use --input/--url"
    )
}

/// Replaces a [`WorkbookSource::Page`] with the workbook URL found on it.
/// Other sources pass through.
pub fn discover(source: WorkbookSource, timeout: Duration) -> Result<WorkbookSource, StageError> {
    match source {
        WorkbookSource::Page { url, block } => {
            let found = discover_url(&url, &block, timeout).at(Stage::Discover)?;
            Ok(WorkbookSource::Url(found))
        }
        other => Ok(other),
    }
}

/// Loads the configured worksheet of `source` into a grid.
///
/// Link discovery failures are attributed to [`Stage::Discover`], download
/// failures to [`Stage::Fetch`], decoding failures to [`Stage::Read`].
pub fn load_grid(
    source: &WorkbookSource,
    sheet: Option<&str>,
    timeout: Duration,
) -> Result<Grid, StageError> {
    let grid = match source {
        WorkbookSource::Path(path) => read_workbook(path, sheet).at(Stage::Read)?,
        WorkbookSource::Url(url) => {
            let bytes = fetch_bytes(url, timeout).at(Stage::Fetch)?;
            read_workbook_bytes(bytes, sheet).at(Stage::Read)?
        }
        WorkbookSource::Page { .. } => {
            return load_grid(&discover(source.clone(), timeout)?, sheet, timeout);
        }
    };
    info!(
        source = %source,
        n_rows = grid.n_rows(),
        n_cols = grid.n_cols(),
        "grid loaded"
    );
    Ok(grid)
}
