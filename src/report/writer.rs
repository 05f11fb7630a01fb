use std::fs;
use std::path::Path;

use rust_xlsxwriter::{column_number_to_name, ColNum, RowNum, Workbook, Worksheet, XlsxError};

use super::artifact::SpreadsheetArtifact;
use super::style::StyleSheet;
use crate::data::layout::ColumnLayout;
use crate::data::model::ProjectedTable;
use crate::error::ReportError;

pub const SHEET_NAME: &str = "Order Status Report";

/// Header row height in points.
pub const HEADER_ROW_HEIGHT: f64 = 16.0;

/// Write `table` as a single-sheet workbook at `target`.
///
/// On failure the partially written target is removed before the error is
/// returned.
pub fn emit(table: &ProjectedTable, layout: ColumnLayout, target: &Path) -> Result<SpreadsheetArtifact, ReportError> {
    let bytes = emit_to_buffer(table, layout)?;

    if let Err(err) = fs::write(target, bytes) {
        if let Err(cleanup) = fs::remove_file(target) {
            log::debug!("No partial output to remove at {}: {cleanup}", target.display());
        }
        return Err(ReportError::Emission(XlsxError::IoError(err)));
    }

    log::info!(
        "Wrote {} rows x {} columns to {}",
        table.len(),
        table.width(),
        target.display()
    );
    Ok(SpreadsheetArtifact::new(target.to_path_buf()))
}

/// Same workbook as [`emit`], kept in memory.
pub fn emit_to_buffer(table: &ProjectedTable, layout: ColumnLayout) -> Result<Vec<u8>, ReportError> {
    let mut workbook = build_workbook(table, layout)?;
    Ok(workbook.save_to_buffer()?)
}

/// Autofilter reference covering the header row, e.g. `A1:L1`.
pub fn autofilter_range(width: usize) -> String {
    let last = column_number_to_name(width.saturating_sub(1) as ColNum);
    format!("A1:{last}1")
}

fn build_workbook(table: &ProjectedTable, layout: ColumnLayout) -> Result<Workbook, ReportError> {
    if table.width() != layout.width() {
        return Err(ReportError::LayoutMismatch {
            expected: layout.width(),
            found: table.width(),
        });
    }

    if table.is_empty() {
        log::warn!("No order lines left after exclusions, writing header only");
    }

    let mut workbook = Workbook::new();
    let styles = StyleSheet::new();
    let worksheet = workbook.add_worksheet();
    write_sheet(worksheet, table, &styles)?;
    Ok(workbook)
}

fn write_sheet(worksheet: &mut Worksheet, table: &ProjectedTable, styles: &StyleSheet) -> Result<(), XlsxError> {
    worksheet.set_name(SHEET_NAME)?;

    // Header
    worksheet.set_row_height(0, HEADER_ROW_HEIGHT)?;
    for (col, title) in table.header.iter().enumerate() {
        worksheet.write_string_with_format(0, col as ColNum, title, &styles.header)?;
    }

    // Body
    for (i, values) in table.rows.iter().enumerate() {
        let row = (i + 1) as RowNum;
        for (col, value) in values.iter().enumerate() {
            worksheet.write_string_with_format(row, col as ColNum, value, &styles.body)?;
        }
    }

    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofit();

    let last_col = table.width().saturating_sub(1) as ColNum;
    worksheet.autofilter(0, 0, 0, last_col)?;
    log::debug!("Autofilter on {}", autofilter_range(table.width()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};

    use super::*;
    use crate::data::model::fixtures::record;
    use crate::data::transform::transform;

    fn part_xml(bytes: &[u8], part: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name(part)
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    fn sheet_xml(bytes: &[u8]) -> String {
        part_xml(bytes, "xl/worksheets/sheet1.xml")
    }

    fn cell_rows(bytes: Vec<u8>) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), [SHEET_NAME]);
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Data::String(s) => s.clone(),
                        Data::Empty => String::new(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect()
    }

    fn sample_table(layout: ColumnLayout) -> ProjectedTable {
        transform(
            vec![
                record(1, "Open", "TORONTO", "1", "1"),
                record(2, "Shipped", "MONTREAL", "1", "1"),
            ],
            layout,
        )
        .unwrap()
    }

    #[test]
    fn autofilter_range_ends_at_last_header_column() {
        assert_eq!(autofilter_range(1), "A1:A1");
        assert_eq!(autofilter_range(12), "A1:L1");
        assert_eq!(autofilter_range(15), "A1:O1");
        assert_eq!(autofilter_range(27), "A1:AA1");
    }

    #[test]
    fn stylesheet_carries_header_and_body_formats() {
        let bytes = emit_to_buffer(&sample_table(ColumnLayout::Standard), ColumnLayout::Standard).unwrap();
        let styles = part_xml(&bytes, "xl/styles.xml");

        assert!(styles.contains("<b/>"), "{styles}");
        assert!(styles.contains("<sz val=\"12\"/>"), "{styles}");
        assert!(styles.contains("rgb=\"FFC0C0C0\""), "{styles}");
        assert!(styles.contains("rgb=\"FFFFFFFF\""), "{styles}");
        assert!(styles.contains("horizontal=\"center\""), "{styles}");
        assert!(styles.contains("horizontal=\"left\""), "{styles}");
        assert!(styles.contains("wrapText=\"1\""), "{styles}");
    }

    #[test]
    fn writes_header_then_body_rows() {
        let table = sample_table(ColumnLayout::Standard);
        let rows = cell_rows(emit_to_buffer(&table, ColumnLayout::Standard).unwrap());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], table.header);
        assert_eq!(rows[1], table.rows[0]);
        assert_eq!(rows[2][9], "Shipped");
    }

    #[test]
    fn autofilter_tracks_layout_width() {
        for layout in [ColumnLayout::Standard, ColumnLayout::Extended] {
            let bytes = emit_to_buffer(&sample_table(layout), layout).unwrap();
            let xml = sheet_xml(&bytes);
            let expected = format!("<autoFilter ref=\"{}\"", autofilter_range(layout.width()));
            assert!(xml.contains(&expected), "{layout:?}: {xml}");
        }
    }

    #[test]
    fn header_only_table_keeps_pane_and_filter() {
        let table = transform(Vec::new(), ColumnLayout::Standard).unwrap();
        let bytes = emit_to_buffer(&table, ColumnLayout::Standard).unwrap();

        let xml = sheet_xml(&bytes);
        assert!(xml.contains("<autoFilter ref=\"A1:L1\""));
        assert!(xml.contains("ySplit=\"1\""));
        assert!(xml.contains("state=\"frozen\""));
        assert!(xml.contains("ht=\"16\""));

        let rows = cell_rows(bytes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 12);
    }

    #[test]
    fn table_wider_than_layout_is_rejected() {
        let table = sample_table(ColumnLayout::Extended);
        let err = emit_to_buffer(&table, ColumnLayout::Standard).unwrap_err();
        assert!(matches!(
            err,
            ReportError::LayoutMismatch { expected: 12, found: 15 }
        ));
    }

    #[test]
    fn emit_writes_target_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("report.xlsx");
        let artifact = emit(&sample_table(ColumnLayout::Extended), ColumnLayout::Extended, &target).unwrap();

        assert_eq!(artifact.path(), target.as_path());
        let rows = cell_rows(std::fs::read(&target).unwrap());
        assert_eq!(rows[0].len(), 15);
    }

    #[test]
    fn unwritable_target_is_emission_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing-dir").join("report.xlsx");
        let err = emit(&sample_table(ColumnLayout::Standard), ColumnLayout::Standard, &target).unwrap_err();
        assert!(matches!(err, ReportError::Emission(_)));
        assert!(!target.exists());
    }
}
