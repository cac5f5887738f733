//! CSV Codec
//!
//! Converts between inventory file rows and [`InventoryRecord`]s. Rows are decoded by position:
//! the header line is skipped whatever it says, short rows are padded with empty fields and
//! extra fields are ignored.

use std::{borrow::Cow, collections::HashSet, io};

use csv::{ByteRecord, ReaderBuilder, StringRecord, WriterBuilder};
use jiff::civil::Date;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    money::{AmountError, format_amount, parse_amount},
    records::{InventoryRecord, ItemDetails, RecordId, Sale, Status, UnknownStatus},
};

/// Canonical column header.
pub const HEADER: [&str; 13] = [
    "ID",
    "Item Name",
    "Brand",
    "Category",
    "Size",
    "Purchase Price",
    "Sale Price",
    "Shipping Cost",
    "eBay Fee",
    "Profit",
    "Listed Date",
    "Sold Date",
    "Status",
];

const ID: usize = 0;
const ITEM_NAME: usize = 1;
const BRAND: usize = 2;
const CATEGORY: usize = 3;
const SIZE: usize = 4;
const PURCHASE_PRICE: usize = 5;
const SALE_PRICE: usize = 6;
const SHIPPING_COST: usize = 7;
const FEE: usize = 8;
const PROFIT: usize = 9;
const LISTED_DATE: usize = 10;
const SOLD_DATE: usize = 11;
const STATUS: usize = 12;

/// Columns that only carry values once an item is sold.
const SALE_COLUMNS: [usize; 5] = [SALE_PRICE, SHIPPING_COST, FEE, PROFIT, SOLD_DATE];

/// Reasons a row cannot be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The id column is not a whole number.
    #[error("invalid id '{0}'")]
    InvalidId(String),

    /// A monetary column did not parse.
    #[error("invalid {column}: {source}")]
    InvalidAmount {
        /// Column heading
        column: &'static str,
        /// Parse failure
        source: AmountError,
    },

    /// A date column is not `YYYY-MM-DD`.
    #[error("invalid {column} '{value}'")]
    InvalidDate {
        /// Column heading
        column: &'static str,
        /// Text found
        value: String,
    },

    /// The status column is not recognised.
    #[error(transparent)]
    Status(#[from] UnknownStatus),

    /// The row contains bytes that are not UTF-8.
    #[error("row is not valid UTF-8")]
    InvalidUtf8,

    /// An earlier row already uses this id.
    #[error("duplicate id {0}")]
    DuplicateId(RecordId),
}

/// A row from the inventory file.
#[derive(Debug, Clone)]
pub(crate) enum Entry {
    /// Row decoded into a record.
    Record(InventoryRecord),

    /// Row kept exactly as read so it is written back untouched.
    Unreadable(UnreadableRow),
}

impl Entry {
    pub(crate) fn record(&self) -> Option<&InventoryRecord> {
        match self {
            Entry::Record(record) => Some(record),
            Entry::Unreadable(_) => None,
        }
    }

    pub(crate) fn record_mut(&mut self) -> Option<&mut InventoryRecord> {
        match self {
            Entry::Record(record) => Some(record),
            Entry::Unreadable(_) => None,
        }
    }
}

/// A row that could not be decoded.
#[derive(Debug, Clone)]
pub struct UnreadableRow {
    line: u64,
    fields: ByteRecord,
    reason: DecodeError,
}

impl UnreadableRow {
    /// Line number in the file the row was read from.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Fields of the row. Bytes that are not UTF-8 show as replacement characters.
    pub fn fields(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.fields.iter().map(String::from_utf8_lossy)
    }

    /// Why the row could not be decoded.
    pub fn reason(&self) -> &DecodeError {
        &self.reason
    }
}

/// A decoded row and the names of any columns whose values were discarded.
#[derive(Debug)]
pub(crate) struct Decoded {
    pub record: InventoryRecord,
    pub dropped: Vec<&'static str>,
}

/// Read every row after the header.
///
/// Rows that cannot be decoded, including rows that repeat an earlier id, are kept as
/// [`Entry::Unreadable`].
///
/// # Errors
///
/// Returns a [`csv::Error`] if the input cannot be read.
pub(crate) fn read_entries(reader: impl io::Read) -> Result<Vec<Entry>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for row in reader.byte_records() {
        let row = row?;
        let line = row.position().map_or(0, csv::Position::line);

        let (fields, decoded) = match StringRecord::from_byte_record(row) {
            Ok(fields) => {
                let decoded = decode(&fields);
                (fields.into_byte_record(), decoded)
            }
            Err(error) => (error.into_byte_record(), Err(DecodeError::InvalidUtf8)),
        };

        let decoded = decoded.and_then(|decoded| {
            let id = decoded.record.id();

            if seen.insert(id) {
                Ok(decoded)
            } else {
                Err(DecodeError::DuplicateId(id))
            }
        });

        let entry = match decoded {
            Ok(decoded) => {
                if !decoded.dropped.is_empty() {
                    tracing::warn!(
                        id = %decoded.record.id(),
                        columns = ?decoded.dropped,
                        "ignoring sale columns on a listed item"
                    );
                }

                Entry::Record(decoded.record)
            }
            Err(reason) => {
                tracing::warn!(line, %reason, "keeping unreadable inventory row as-is");

                Entry::Unreadable(UnreadableRow {
                    line,
                    fields,
                    reason,
                })
            }
        };

        entries.push(entry);
    }

    Ok(entries)
}

/// Write the canonical header followed by every entry.
///
/// # Errors
///
/// Returns a [`csv::Error`] if writing fails.
pub(crate) fn write_entries(writer: impl io::Write, entries: &[Entry]) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    writer.write_record(HEADER)?;

    for entry in entries {
        match entry {
            Entry::Record(record) => writer.write_record(encode(record))?,
            Entry::Unreadable(row) => writer.write_byte_record(&row.fields)?,
        }
    }

    writer.flush()?;

    Ok(())
}

/// Encode a record as a row in column order.
pub(crate) fn encode(record: &InventoryRecord) -> [String; 13] {
    let optional_amount = |amount: Option<Decimal>| amount.map(format_amount).unwrap_or_default();

    [
        record.id().to_string(),
        record.item_name().to_string(),
        record.brand().to_string(),
        record.category().to_string(),
        record.size().to_string(),
        format_amount(record.purchase_price()),
        optional_amount(record.sale_price()),
        optional_amount(record.shipping_cost()),
        optional_amount(record.fee()),
        optional_amount(record.profit()),
        record.listed_date().to_string(),
        record
            .sold_date()
            .map(|date| date.to_string())
            .unwrap_or_default(),
        record.status().to_string(),
    ]
}

/// Decode a row into a record.
///
/// The profit column is never read; profit is recomputed from the prices.
///
/// # Errors
///
/// Returns a [`DecodeError`] describing the first column that could not be decoded.
pub(crate) fn decode(row: &StringRecord) -> Result<Decoded, DecodeError> {
    let field = |index: usize| row.get(index).unwrap_or("");

    let id: RecordId = field(ID)
        .parse()
        .map_err(|_err| DecodeError::InvalidId(field(ID).to_string()))?;

    let details = ItemDetails {
        item_name: field(ITEM_NAME).to_string(),
        brand: field(BRAND).to_string(),
        category: field(CATEGORY).to_string(),
        size: field(SIZE).to_string(),
    };

    let purchase_price = amount(field(PURCHASE_PRICE), PURCHASE_PRICE)?;
    let listed_date = date(field(LISTED_DATE), LISTED_DATE)?;
    let status = status(field(STATUS), field(SOLD_DATE))?;

    let record = InventoryRecord::listed(id, details, purchase_price, listed_date);

    match status {
        Status::Sold => {
            let sale = Sale {
                sale_price: amount(field(SALE_PRICE), SALE_PRICE)?,
                shipping_cost: amount(field(SHIPPING_COST), SHIPPING_COST)?,
                fee: amount(field(FEE), FEE)?,
                sold_date: date(field(SOLD_DATE), SOLD_DATE)?,
            };

            Ok(Decoded {
                record: record.with_sale(Some(sale)),
                dropped: Vec::new(),
            })
        }
        Status::Listed => {
            let dropped = SALE_COLUMNS
                .iter()
                .filter(|&&index| !field(index).trim().is_empty())
                .filter_map(|&index| HEADER.get(index).copied())
                .collect();

            Ok(Decoded { record, dropped })
        }
    }
}

fn heading(index: usize) -> &'static str {
    HEADER.get(index).copied().unwrap_or("column")
}

fn amount(value: &str, index: usize) -> Result<Decimal, DecodeError> {
    parse_amount(value).map_err(|source| DecodeError::InvalidAmount {
        column: heading(index),
        source,
    })
}

fn date(value: &str, index: usize) -> Result<Date, DecodeError> {
    value
        .trim()
        .parse()
        .map_err(|_err| DecodeError::InvalidDate {
            column: heading(index),
            value: value.to_string(),
        })
}

/// An empty status column is inferred from the sold date.
fn status(value: &str, sold_date: &str) -> Result<Status, DecodeError> {
    if value.trim().is_empty() {
        if sold_date.trim().is_empty() {
            return Ok(Status::Listed);
        }

        return Ok(Status::Sold);
    }

    Ok(value.parse()?)
}
