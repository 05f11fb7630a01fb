use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use super::model::{SourceField, SourceRecord};
use crate::error::ReportError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every row of an order-status export.
pub fn load_file(path: &Path) -> Result<Vec<SourceRecord>, ReportError> {
    let file = File::open(path)?;
    let records = read_records(file)?;
    log::info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// CSV layout: comma delimited, standard double-quote escaping, first row
/// holds the export's field names. Column order does not matter, unknown
/// columns are ignored and so are cells past the end of the header.
///
/// Only the fields read by the exclusion rules are required here; report
/// columns are checked once a row is known to survive.
pub fn read_records<R: Read>(input: R) -> Result<Vec<SourceRecord>, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let index = HeaderIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(index.record(&row)?);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Header validation
// ---------------------------------------------------------------------------

/// Column positions of every known field, resolved once from the header.
struct HeaderIndex {
    positions: [Option<usize>; SourceField::COUNT],
}

impl HeaderIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, ReportError> {
        if headers.is_empty() {
            return Err(ReportError::MalformedInput(
                "input is empty, expected a header row".to_string(),
            ));
        }

        let mut positions = [None; SourceField::COUNT];
        for (col, name) in headers.iter().enumerate() {
            if let Some(field) = SourceField::from_key(name) {
                let slot = &mut positions[field.index()];
                if slot.is_none() {
                    *slot = Some(col);
                }
            }
        }

        // A header sharing nothing with the export is a different file, or
        // the same file split on the wrong delimiter.
        if positions.iter().all(Option::is_none) {
            return Err(ReportError::MalformedInput(format!(
                "header row has none of the expected columns (found {} column(s) starting with {:?})",
                headers.len(),
                headers.get(0).unwrap_or_default()
            )));
        }

        if let Some(missing) = SourceField::ALL
            .into_iter()
            .find(|&f| f.is_rule_field() && positions[f.index()].is_none())
        {
            return Err(ReportError::MissingField {
                field: missing.key(),
                line: 1,
            });
        }
        Ok(HeaderIndex { positions })
    }

    fn cell(&self, row: &StringRecord, field: SourceField) -> Option<String> {
        self.positions[field.index()]
            .and_then(|col| row.get(col))
            .map(str::to_string)
    }

    fn record(&self, row: &StringRecord) -> Result<SourceRecord, ReportError> {
        let line = row.position().map_or(0, |p| p.line());
        let rule_field = |field: SourceField| -> Result<String, ReportError> {
            self.cell(row, field).ok_or(ReportError::MissingField {
                field: field.key(),
                line,
            })
        };

        Ok(SourceRecord {
            line,
            progress_point: rule_field(SourceField::ProgressPoint)?,
            ship_location: rule_field(SourceField::ShipLocation)?,
            sub_line_item: rule_field(SourceField::SubLineItem)?,
            ship_schedule_id: rule_field(SourceField::ShipScheduleId)?,
            line_number: self.cell(row, SourceField::LineNumber),
            unfilled_qty: self.cell(row, SourceField::UnfilledQty),
            shipped_qty: self.cell(row, SourceField::ShippedQty),
            catalog_number: self.cell(row, SourceField::CatalogNumber),
            catalog_description: self.cell(row, SourceField::CatalogDescription),
            designation: self.cell(row, SourceField::Designation),
            commit_ship_date: self.cell(row, SourceField::CommitShipDate),
            not_before_date: self.cell(row, SourceField::NotBeforeDate),
            promise_date: self.cell(row, SourceField::PromiseDate),
            requested_delivery_date: self.cell(row, SourceField::RequestedDeliveryDate),
            ship_date: self.cell(row, SourceField::ShipDate),
            action_status: self.cell(row, SourceField::ActionStatus),
        })
    }
}
