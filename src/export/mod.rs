//! Writers for the standings export and the next round's file.
//!
//! - [`table`]: Standings snapshot as TSV, CSV or JSON
//! - [`round`]: Pending-round lines (`<A> - <B> ; ? - ? ; ? - ?`)
//!
//! Files are written to a temporary file in the target directory and then
//! renamed over the destination, so a reader never sees a half-written round.

use std::io::Write;
use std::path::Path;
use thiserror::Error;

pub mod round;
pub mod table;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize standings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Replace `path` with `contents` via a temporary file in the same directory
pub(crate) fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.flush()?;
    file.persist(path).map_err(|e| ExportError::Persist {
        path: path.display().to_string(),
        source: e.error,
    })?;
    Ok(())
}
