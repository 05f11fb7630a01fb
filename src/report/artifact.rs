use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// A finished workbook sitting at a staging path until the caller keeps or
/// discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetArtifact {
    path: PathBuf,
}

impl SpreadsheetArtifact {
    pub(crate) fn new(path: PathBuf) -> Self {
        SpreadsheetArtifact { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move the workbook to `dest`, replacing any file already there.
    ///
    /// Falls back to copy-then-delete when a plain rename is refused, e.g.
    /// when the staging directory is on another volume.
    pub fn save_as(self, dest: &Path) -> Result<PathBuf, ReportError> {
        if let Err(err) = fs::rename(&self.path, dest) {
            log::debug!("rename to {} failed ({err}), copying instead", dest.display());
            fs::copy(&self.path, dest)?;
            if let Err(err) = fs::remove_file(&self.path) {
                log::warn!("Could not remove {}: {err}", self.path.display());
            }
        }
        log::info!("Saved report to {}", dest.display());
        Ok(dest.to_path_buf())
    }

    /// Delete the staged workbook. A file that is already gone is fine.
    pub fn discard(self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}
