use std::fmt;

// ---------------------------------------------------------------------------
// SourceField – one column of the order-status export
// ---------------------------------------------------------------------------

/// The columns of the export this tool knows about, keyed by their exact
/// header names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceField {
    LineNumber,
    SubLineItem,
    UnfilledQty,
    ShippedQty,
    CatalogNumber,
    CatalogDescription,
    Designation,
    ShipLocation,
    ShipScheduleId,
    CommitShipDate,
    NotBeforeDate,
    PromiseDate,
    RequestedDeliveryDate,
    ProgressPoint,
    ShipDate,
    ActionStatus,
}

impl SourceField {
    pub const COUNT: usize = 16;

    pub const ALL: [SourceField; Self::COUNT] = [
        SourceField::LineNumber,
        SourceField::SubLineItem,
        SourceField::UnfilledQty,
        SourceField::ShippedQty,
        SourceField::CatalogNumber,
        SourceField::CatalogDescription,
        SourceField::Designation,
        SourceField::ShipLocation,
        SourceField::ShipScheduleId,
        SourceField::CommitShipDate,
        SourceField::NotBeforeDate,
        SourceField::PromiseDate,
        SourceField::RequestedDeliveryDate,
        SourceField::ProgressPoint,
        SourceField::ShipDate,
        SourceField::ActionStatus,
    ];

    /// Header name used by the export.
    pub fn key(self) -> &'static str {
        match self {
            SourceField::LineNumber => "ln_dsply_seq_nbr",
            SourceField::SubLineItem => "sub_ln_itm_id",
            SourceField::UnfilledQty => "unfld_ord_qty",
            SourceField::ShippedQty => "shpd_qty",
            SourceField::CatalogNumber => "catlg_nbr",
            SourceField::CatalogDescription => "catlg_desc",
            SourceField::Designation => "desnat_desc",
            SourceField::ShipLocation => "shiploc",
            SourceField::ShipScheduleId => "shpschd_id",
            SourceField::CommitShipDate => "commit_shpschd_dt",
            SourceField::NotBeforeDate => "not_b4_dt",
            SourceField::PromiseDate => "prom_dt",
            SourceField::RequestedDeliveryDate => "cust_rqst_dlvry_dt",
            SourceField::ProgressPoint => "prgrs_pnt",
            SourceField::ShipDate => "ship_dt",
            SourceField::ActionStatus => "actn_status",
        }
    }

    /// Position in [`SourceField::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_key(key: &str) -> Option<SourceField> {
        SourceField::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Fields read by the exclusion rules. Every row must carry these; the
    /// rest are only checked on rows that make it into the report.
    pub fn is_rule_field(self) -> bool {
        matches!(
            self,
            SourceField::ProgressPoint
                | SourceField::ShipLocation
                | SourceField::SubLineItem
                | SourceField::ShipScheduleId
        )
    }
}

impl fmt::Display for SourceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// SourceRecord – one row of the export
// ---------------------------------------------------------------------------

/// A single order line as read from the export.
///
/// The rule fields are always present. Any other field is `None` when the
/// export has no such column or the row ends before reaching it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRecord {
    /// 1-based line in the source file.
    pub line: u64,
    pub progress_point: String,
    pub ship_location: String,
    pub sub_line_item: String,
    pub ship_schedule_id: String,
    pub line_number: Option<String>,
    pub unfilled_qty: Option<String>,
    pub shipped_qty: Option<String>,
    pub catalog_number: Option<String>,
    pub catalog_description: Option<String>,
    pub designation: Option<String>,
    pub commit_ship_date: Option<String>,
    pub not_before_date: Option<String>,
    pub promise_date: Option<String>,
    pub requested_delivery_date: Option<String>,
    pub ship_date: Option<String>,
    pub action_status: Option<String>,
}

impl SourceRecord {
    /// Value of `field`, or `None` when it was not present in the row.
    pub fn value(&self, field: SourceField) -> Option<&str> {
        let v = match field {
            SourceField::ProgressPoint => return Some(self.progress_point.as_str()),
            SourceField::ShipLocation => return Some(self.ship_location.as_str()),
            SourceField::SubLineItem => return Some(self.sub_line_item.as_str()),
            SourceField::ShipScheduleId => return Some(self.ship_schedule_id.as_str()),
            SourceField::LineNumber => &self.line_number,
            SourceField::UnfilledQty => &self.unfilled_qty,
            SourceField::ShippedQty => &self.shipped_qty,
            SourceField::CatalogNumber => &self.catalog_number,
            SourceField::CatalogDescription => &self.catalog_description,
            SourceField::Designation => &self.designation,
            SourceField::CommitShipDate => &self.commit_ship_date,
            SourceField::NotBeforeDate => &self.not_before_date,
            SourceField::PromiseDate => &self.promise_date,
            SourceField::RequestedDeliveryDate => &self.requested_delivery_date,
            SourceField::ShipDate => &self.ship_date,
            SourceField::ActionStatus => &self.action_status,
        };
        v.as_deref()
    }
}

// ---------------------------------------------------------------------------
// ProjectedTable – the report body handed to the spreadsheet writer
// ---------------------------------------------------------------------------

/// Header plus one row of display values per surviving record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ProjectedTable {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
