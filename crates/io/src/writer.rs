//! Output file writing.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::IoError;

/// Writes `contents` to `path`, creating parent directories and replacing
/// any existing file.
///
/// The data goes to a temporary file in the destination directory first and
/// is persisted over `path`, so readers never observe a half-written
/// calendar.
///
/// # Errors
///
/// Returns [`IoError::Write`] if a directory or file cannot be created.
pub fn write_text(path: &Path, contents: &str) -> Result<(), IoError> {
    let write_err = |source| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    info!(path = %path.display(), n_bytes = contents.len(), "file written");
    Ok(())
}
