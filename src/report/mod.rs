//! Inventory Report
//!
//! A report is a titled table of records with a fixed 13 column layout. It can be rendered as
//! a terminal table or as a Typst document, which `typst compile` turns into a landscape A4
//! PDF.

use std::{fs::File, io, path::Path};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{money::display_amount, records::InventoryRecord};

pub mod table;
pub mod typst;

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "ThriftLift Gear Inventory Report";

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to write the output.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// A report column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Column heading
    pub heading: &'static str,

    /// Width on the printed page, in millimetres
    pub width_mm: u16,

    /// Width in the terminal table, in characters
    pub width_chars: usize,
}

const fn column(heading: &'static str, width_mm: u16, width_chars: usize) -> Column {
    Column {
        heading,
        width_mm,
        width_chars,
    }
}

/// Report columns in order.
pub const COLUMNS: [Column; 13] = [
    column("ID", 12, 10),
    column("Item Name", 35, 24),
    column("Brand", 25, 14),
    column("Category", 25, 14),
    column("Size", 12, 6),
    column("P. Price", 20, 10),
    column("S. Price", 20, 10),
    column("Shipping", 20, 10),
    column("eBay Fee", 20, 10),
    column("Profit", 20, 10),
    column("Listed Date", 25, 11),
    column("Sold Date", 25, 11),
    column("Status", 20, 6),
];

/// A titled set of records ready for rendering.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    title: String,
    records: Vec<&'a InventoryRecord>,
}

impl<'a> Report<'a> {
    /// Create a report over `records` with the default title.
    pub fn new(records: impl IntoIterator<Item = &'a InventoryRecord>) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            records: records.into_iter().collect(),
        }
    }

    /// Replace the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Report title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of records in the report.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the report has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display text for every cell, one array per record.
    pub fn rows(&self) -> impl Iterator<Item = [String; 13]> + '_ {
        self.records.iter().map(|record| cells(record))
    }

    /// Render as a terminal table.
    pub fn to_table(&self) -> String {
        table::render(self)
    }

    /// Render as Typst source.
    pub fn to_typst(&self) -> String {
        typst::render(self)
    }

    /// Write the terminal table to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if writing fails.
    pub fn write_table(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        out.write_all(self.to_table().as_bytes())?;

        Ok(())
    }

    /// Write the Typst document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the file cannot be created or written.
    pub fn write_typst(&self, path: &Path) -> Result<(), ReportError> {
        let mut file = File::create(path)?;

        io::Write::write_all(&mut file, self.to_typst().as_bytes())?;

        tracing::info!(path = %path.display(), records = self.len(), "wrote report");

        Ok(())
    }
}

/// Display text for a record's cells. Unset values are empty.
pub fn cells(record: &InventoryRecord) -> [String; 13] {
    let amount = |value: Option<Decimal>| value.map(display_amount).unwrap_or_default();

    [
        record.id().to_string(),
        record.item_name().to_string(),
        record.brand().to_string(),
        record.category().to_string(),
        record.size().to_string(),
        display_amount(record.purchase_price()),
        amount(record.sale_price()),
        amount(record.shipping_cost()),
        amount(record.fee()),
        amount(record.profit()),
        record.listed_date().to_string(),
        record
            .sold_date()
            .map(|date| date.to_string())
            .unwrap_or_default(),
        record.status().to_string(),
    ]
}
