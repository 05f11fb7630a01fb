use super::model::SourceField;

/// One report column: its header text and the export field it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub field: SourceField,
}

const fn col(header: &'static str, field: SourceField) -> Column {
    Column { header, field }
}

const STANDARD: [Column; 12] = [
    col("Line Number", SourceField::LineNumber),
    col("Sub-Line Number", SourceField::SubLineItem),
    col("Unfilled Qty", SourceField::UnfilledQty),
    col("Shipped Qty", SourceField::ShippedQty),
    col("Catalog Number", SourceField::CatalogNumber),
    col("Catalog Description", SourceField::CatalogDescription),
    col("Designation", SourceField::Designation),
    col("Shipping Location", SourceField::ShipLocation),
    col("Current Ship Date", SourceField::PromiseDate),
    col("Progress Point", SourceField::ProgressPoint),
    col("Date Shipped", SourceField::ShipDate),
    col("Hold Y/N", SourceField::ActionStatus),
];

const EXTENDED: [Column; 15] = [
    col("Line Number", SourceField::LineNumber),
    col("Sub-Line Number", SourceField::SubLineItem),
    col("Unfilled Qty", SourceField::UnfilledQty),
    col("Shipped Qty", SourceField::ShippedQty),
    col("Catalog Number", SourceField::CatalogNumber),
    col("Catalog Description", SourceField::CatalogDescription),
    col("Designation", SourceField::Designation),
    col("Shipping Location", SourceField::ShipLocation),
    col("Commit Ship Date", SourceField::CommitShipDate),
    col("Not Before Date", SourceField::NotBeforeDate),
    col("Current Ship Date", SourceField::PromiseDate),
    col("Customer Requested Delivery Date", SourceField::RequestedDeliveryDate),
    col("Progress Point", SourceField::ProgressPoint),
    col("Date Shipped", SourceField::ShipDate),
    col("Hold Y/N", SourceField::ActionStatus),
];

/// The two fixed report shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnLayout {
    #[default]
    Standard,
    /// Adds commit, not-before and customer-requested dates.
    Extended,
}

impl ColumnLayout {
    pub fn from_extended(use_extended: bool) -> Self {
        if use_extended {
            ColumnLayout::Extended
        } else {
            ColumnLayout::Standard
        }
    }

    pub fn columns(self) -> &'static [Column] {
        match self {
            ColumnLayout::Standard => &STANDARD,
            ColumnLayout::Extended => &EXTENDED,
        }
    }

    pub fn width(self) -> usize {
        self.columns().len()
    }

    pub fn headers(self) -> impl Iterator<Item = &'static str> {
        self.columns().iter().map(|c| c.header)
    }

    /// Whether this layout reads `field`.
    pub fn reads(self, field: SourceField) -> bool {
        self.columns().iter().any(|c| c.field == field)
    }
}
