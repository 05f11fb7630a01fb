use std::path::Path;

use super::filter::apply_exclusions;
use super::layout::ColumnLayout;
use super::loader::load_file;
use super::model::{ProjectedTable, SourceRecord};
use crate::error::ReportError;

/// Read an export, drop excluded lines and project the rest.
pub fn transform_file(path: &Path, use_extended: bool) -> Result<ProjectedTable, ReportError> {
    let layout = ColumnLayout::from_extended(use_extended);
    let records = load_file(path)?;
    transform(records, layout)
}

/// Apply the exclusion rules, then project the survivors through `layout`.
///
/// Excluded lines are never projected, so only survivors need every field
/// the layout reads.
pub fn transform(records: Vec<SourceRecord>, layout: ColumnLayout) -> Result<ProjectedTable, ReportError> {
    let survivors = apply_exclusions(records);

    let rows = survivors
        .iter()
        .map(|rec| project(rec, layout))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Projected {} rows into {} columns", rows.len(), layout.width());
    Ok(ProjectedTable {
        header: layout.headers().map(str::to_string).collect(),
        rows,
    })
}

fn project(record: &SourceRecord, layout: ColumnLayout) -> Result<Vec<String>, ReportError> {
    layout
        .columns()
        .iter()
        .map(|column| {
            record
                .value(column.field)
                .map(str::to_string)
                .ok_or(ReportError::MissingField {
                    field: column.field.key(),
                    line: record.line,
                })
        })
        .collect()
}
