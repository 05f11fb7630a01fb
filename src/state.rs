use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::session;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Debug, Default)]
pub struct AppState {
    /// Export chosen by the user (None until a file is picked).
    pub selected_file: Option<PathBuf>,

    /// Produce the extended (15 column) report.
    pub with_optional_columns: bool,

    /// Messages shown in the log panel, oldest first.
    pub log: Vec<String>,
}

impl AppState {
    /// Append a line to the log panel.
    pub fn push_log(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{message}");
        self.log.push(message);
    }

    /// Record the outcome of the open-file dialog.
    pub fn select_file(&mut self, file: Option<PathBuf>) {
        match file {
            Some(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.push_log(format!("Opening: {name}."));
                self.selected_file = Some(path);
            }
            None => {
                self.push_log("Opening command cancelled by user.");
                self.push_log("No file selected.");
                self.selected_file = None;
            }
        }
    }

    /// Build a report from the selected file and hand it to
    /// `pick_destination` for saving. The staged workbook is removed
    /// afterwards whatever happened.
    pub fn create_report(&mut self, pick_destination: impl FnOnce() -> Option<PathBuf>) {
        let Some(source) = self.selected_file.clone() else {
            self.push_log("Select a CSV file first.");
            return;
        };

        let staging = session::staging_path();
        if let Err(err) = self.run_report(&source, &staging, pick_destination) {
            log::error!("Report generation failed: {err:#}");
            self.log.push(format!("Error: {err:#}"));
        }
        session::cleanup(&[&staging]);
    }

    fn run_report(
        &mut self,
        source: &Path,
        staging: &Path,
        pick_destination: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<()> {
        let artifact = session::create_report(source, self.with_optional_columns, staging)
            .with_context(|| format!("creating report from {}", source.display()))?;
        log::debug!("Staged report at {}", artifact.path().display());
        self.push_log("Report is now created.");

        match pick_destination() {
            Some(dest) => {
                let saved = artifact
                    .save_as(&dest)
                    .with_context(|| format!("saving report to {}", dest.display()))?;
                self.push_log(format!("Saving: {}", saved.display()));
                // A fresh selection is needed for the next report.
                self.selected_file = None;
            }
            None => {
                artifact.discard().context("discarding unsaved report")?;
                self.push_log("Save command cancelled by user.");
            }
        }
        Ok(())
    }
}
