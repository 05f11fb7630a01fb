use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::data::layout::ColumnLayout;
use crate::data::transform::transform_file;
use crate::error::ReportError;
use crate::report::artifact::SpreadsheetArtifact;
use crate::report::writer::emit;

// ---------------------------------------------------------------------------
// One report run, start to finish
// ---------------------------------------------------------------------------

/// Turn the export at `source` into a workbook staged at `staging`.
pub fn create_report(source: &Path, use_extended: bool, staging: &Path) -> Result<SpreadsheetArtifact, ReportError> {
    let layout = ColumnLayout::from_extended(use_extended);
    log::info!("Creating {layout:?} report from {}", source.display());

    let table = transform_file(source, use_extended)?;
    emit(&table, layout, staging)
}

static STAGED: AtomicUsize = AtomicUsize::new(0);

/// A fresh temp-dir path to stage a workbook at before the user picks a
/// destination.
pub fn staging_path() -> PathBuf {
    let n = STAGED.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("osrg-{}-{n}.xlsx", std::process::id()))
}

/// Best-effort removal of intermediate files. Files that are already gone
/// are skipped; other failures are logged and otherwise ignored.
pub fn cleanup<P: AsRef<Path>>(paths: &[P]) {
    for path in paths {
        let path = path.as_ref();
        match fs::remove_file(path) {
            Ok(()) => log::debug!("Removed {}", path.display()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => log::warn!("Could not remove {}: {err}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::loader::tests::{full_row, FULL_HEADER};

    fn export_file(rows: &[String]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{FULL_HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn create_save_and_clean_up() {
        let export = export_file(&[
            full_row("Shipped", "1", "TORONTO", "1", "10"),
            full_row("Cancelled", "1", "TORONTO", "1", "20"),
        ]);
        let dir = tempfile::tempdir().unwrap();
        let staging = dir.path().join("staged.xlsx");

        let artifact = create_report(export.path(), true, &staging).unwrap();
        assert!(staging.exists());

        let dest = dir.path().join("report.xlsx");
        artifact.save_as(&dest).unwrap();
        assert!(dest.exists());

        cleanup(&[staging.as_path()]);
        assert!(dest.exists());
    }

    #[test]
    fn failed_run_leaves_no_staged_workbook() {
        let export = export_file(&["Shipped,1,TORONTO".to_string()]);
        let dir = tempfile::tempdir().unwrap();
        let staging = dir.path().join("staged.xlsx");

        let err = create_report(export.path(), false, &staging).unwrap_err();
        assert!(matches!(err, ReportError::MissingField { line: 2, .. }));
        assert!(!staging.exists());

        // Nothing to remove: cleanup stays quiet and does not panic.
        cleanup(&[staging]);
    }

    #[test]
    fn cleanup_removes_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.xlsx");
        fs::write(&a, "x").unwrap();

        cleanup(&[&a, &b]);
        assert!(!a.exists());
    }

    #[test]
    fn staging_paths_are_distinct_xlsx_files_in_temp_dir() {
        let path = staging_path();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("xlsx"));
        assert!(path.starts_with(std::env::temp_dir()));
        assert_ne!(path, staging_path());
    }
}
