//! Inventory Store
//!
//! The store keeps a mirror of every row in the inventory file. Each mutation builds the next
//! set of rows on a copy, writes it to a temporary file beside the inventory file and renames
//! it into place. The mirror is only replaced once the rename succeeds, so a failed operation
//! leaves both the file and the mirror as they were.

use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{
    clock::{Clock, SystemClock},
    money::parse_amount,
    records::{InventoryRecord, ItemUpdate, NewItem, RecordId, Sale, Status},
    report::Report,
    store::{
        codec::{Entry, UnreadableRow},
        errors::{AmountField, StoreError, ValidationError, invalid_amount},
    },
};

pub mod codec;
pub mod errors;

/// Create the inventory file with the column header if it does not exist yet.
///
/// Returns `true` when a new file was created. An existing file is never modified.
///
/// # Errors
///
/// Returns a [`StoreError::Storage`] if the file cannot be created.
pub fn initialize(path: &Path) -> Result<bool, StoreError> {
    if path.exists() {
        return Ok(false);
    }

    let mut file = NamedTempFile::new_in(parent_dir(path))?;
    codec::write_entries(&mut file, &[])?;

    match file.persist_noclobber(path) {
        Ok(_) => {
            info!(path = %path.display(), "created inventory file");
            Ok(true)
        }
        Err(error) if error.error.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(error) => Err(error.into()),
    }
}

/// Inventory records backed by a CSV file.
#[derive(Debug)]
pub struct InventoryStore<C: Clock = SystemClock> {
    path: PathBuf,
    entries: Vec<Entry>,
    clock: C,
    last_id: Option<RecordId>,
}

impl InventoryStore {
    /// Open the inventory at `path`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError::Storage`] if the file cannot be created or read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::open_with_clock(path, SystemClock)
    }
}

impl<C: Clock> InventoryStore<C> {
    /// Open the inventory at `path` using `clock` for ids and dates.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError::Storage`] if the file cannot be created or read.
    pub fn open_with_clock(path: impl Into<PathBuf>, clock: C) -> Result<Self, StoreError> {
        let path = path.into();

        initialize(&path)?;

        let mut store = Self {
            path,
            entries: Vec::new(),
            clock,
            last_id: None,
        };

        store.reload()?;

        Ok(store)
    }

    /// Path of the inventory file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rebuild the mirror from the inventory file.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError::Storage`] if the file cannot be read.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        let file = fs::File::open(&self.path)?;
        let entries = codec::read_entries(io::BufReader::new(file))?;

        let highest = entries
            .iter()
            .filter_map(Entry::record)
            .map(InventoryRecord::id)
            .max();

        self.last_id = self.last_id.max(highest);
        self.entries = entries;

        debug!(
            path = %self.path.display(),
            rows = self.entries.len(),
            unreadable = self.unreadable_rows().count(),
            "loaded inventory"
        );

        Ok(())
    }

    /// Re-read the inventory file and return every record in file order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError::Storage`] if the file cannot be read.
    pub fn load_all(&mut self) -> Result<Vec<InventoryRecord>, StoreError> {
        self.reload()?;

        Ok(self.records().cloned().collect())
    }

    /// Records in file order.
    pub fn records(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.entries.iter().filter_map(Entry::record)
    }

    /// Rows that could not be read as records. They are preserved on every rewrite.
    pub fn unreadable_rows(&self) -> impl Iterator<Item = &UnreadableRow> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Unreadable(row) => Some(row),
            Entry::Record(_) => None,
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records().count()
    }

    /// Check whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records().next().is_none()
    }

    /// Find a record by id.
    pub fn find_by_id(&self, id: RecordId) -> Option<&InventoryRecord> {
        self.records().find(|record| record.id() == id)
    }

    /// Records whose category is exactly `category`.
    pub fn filter_by_category(&self, category: &str) -> Vec<&InventoryRecord> {
        self.records()
            .filter(|record| record.category() == category)
            .collect()
    }

    /// Distinct categories in sorted order.
    pub fn list_categories(&self) -> BTreeSet<&str> {
        self.records().map(InventoryRecord::category).collect()
    }

    /// Report over every record.
    pub fn report(&self) -> Report<'_> {
        Report::new(self.records())
    }

    /// List a new item.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError::Validation`] if the purchase price is not a valid amount, or a
    /// [`StoreError::Storage`] if the file cannot be written.
    pub fn create(&mut self, item: NewItem) -> Result<InventoryRecord, StoreError> {
        let purchase_price = parse_amount(&item.purchase_price)
            .map_err(invalid_amount(AmountField::PurchasePrice))?;

        let id = self.next_id();
        let record = InventoryRecord::listed(id, item.details, purchase_price, self.clock.today());

        let mut entries = self.entries.clone();
        entries.push(Entry::Record(record.clone()));

        self.commit(entries)?;
        self.last_id = Some(id);

        info!(%id, item = record.item_name(), "listed item");

        Ok(record)
    }

    /// Edit a record. Only the fields supplied in `update` change.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if there is no record with `id`,
    /// [`StoreError::Validation`] if a value is invalid or the edit would change the record's
    /// status, or [`StoreError::Storage`] if the file cannot be written.
    pub fn update(
        &mut self,
        id: RecordId,
        update: ItemUpdate,
    ) -> Result<InventoryRecord, StoreError> {
        let mut entries = self.entries.clone();
        let record = find_mut(&mut entries, id)?;

        apply_update(record, update)?;

        let updated = record.clone();

        self.commit(entries)?;

        info!(%id, "updated item");

        Ok(updated)
    }

    /// Record the sale of a listed item.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if there is no record with `id`,
    /// [`StoreError::Validation`] if the item is already sold or an amount is invalid, or
    /// [`StoreError::Storage`] if the file cannot be written.
    pub fn mark_sold(
        &mut self,
        id: RecordId,
        sale_price: &str,
        shipping_cost: &str,
        fee: &str,
    ) -> Result<InventoryRecord, StoreError> {
        let mut entries = self.entries.clone();
        let record = find_mut(&mut entries, id)?;

        if record.is_sold() {
            return Err(ValidationError::AlreadySold(id).into());
        }

        let sale = Sale {
            sale_price: parse_amount(sale_price).map_err(invalid_amount(AmountField::SalePrice))?,
            shipping_cost: parse_amount(shipping_cost)
                .map_err(invalid_amount(AmountField::ShippingCost))?,
            fee: parse_amount(fee).map_err(invalid_amount(AmountField::Fee))?,
            sold_date: self.clock.today(),
        };

        *record.details_mut().sale = Some(sale);

        let sold = record.clone();

        self.commit(entries)?;

        info!(%id, profit = ?sold.profit(), "marked item sold");

        Ok(sold)
    }

    /// Remove every sold record, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError::Storage`] if the file cannot be written.
    pub fn delete_sold(&mut self) -> Result<usize, StoreError> {
        let is_sold = |entry: &Entry| entry.record().is_some_and(InventoryRecord::is_sold);

        let removed = self.entries.iter().filter(|entry| is_sold(*entry)).count();

        if removed == 0 {
            return Ok(0);
        }

        let entries = self
            .entries
            .iter()
            .filter(|entry| !is_sold(*entry))
            .cloned()
            .collect();

        self.commit(entries)?;

        info!(count = removed, "deleted sold items");

        Ok(removed)
    }

    fn next_id(&self) -> RecordId {
        let now = RecordId::new(u64::try_from(self.clock.unix_seconds()).unwrap_or_default());

        match self.last_id {
            Some(last) => now.max(last.next()),
            None => now,
        }
    }

    /// Write `entries` to disk and, once that succeeds, make them the mirror.
    fn commit(&mut self, entries: Vec<Entry>) -> Result<(), StoreError> {
        let mut file = NamedTempFile::new_in(parent_dir(&self.path))?;

        if let Ok(metadata) = fs::metadata(&self.path) {
            file.as_file().set_permissions(metadata.permissions())?;
        }

        codec::write_entries(&mut file, &entries)?;
        file.as_file().sync_all()?;
        file.persist(&self.path)?;

        debug!(path = %self.path.display(), rows = entries.len(), "replaced inventory file");

        self.entries = entries;

        Ok(())
    }
}

fn parent_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn find_mut(entries: &mut [Entry], id: RecordId) -> Result<&mut InventoryRecord, StoreError> {
    entries
        .iter_mut()
        .filter_map(Entry::record_mut)
        .find(|record| record.id() == id)
        .ok_or(StoreError::NotFound(id))
}

fn optional_amount(
    value: Option<&str>,
    field: AmountField,
) -> Result<Option<Decimal>, ValidationError> {
    value
        .map(|value| parse_amount(value).map_err(invalid_amount(field)))
        .transpose()
}

/// Validate every supplied value, then apply them all.
fn apply_update(record: &mut InventoryRecord, update: ItemUpdate) -> Result<(), ValidationError> {
    let id = record.id();

    if let Some(to) = update
        .status
        .as_deref()
        .map(str::parse::<Status>)
        .transpose()?
        && to != record.status()
    {
        return Err(ValidationError::StatusChange {
            id,
            from: record.status(),
            to,
        });
    }

    if update.touches_sale() && !record.is_sold() {
        return Err(ValidationError::NotSold(id));
    }

    let purchase_price = optional_amount(
        update.purchase_price.as_deref(),
        AmountField::PurchasePrice,
    )?;
    let sale_price = optional_amount(update.sale_price.as_deref(), AmountField::SalePrice)?;
    let shipping_cost =
        optional_amount(update.shipping_cost.as_deref(), AmountField::ShippingCost)?;
    let fee = optional_amount(update.fee.as_deref(), AmountField::Fee)?;

    let details = record.details_mut();

    if let Some(item_name) = update.item_name {
        *details.item_name = item_name;
    }

    if let Some(brand) = update.brand {
        *details.brand = brand;
    }

    if let Some(category) = update.category {
        *details.category = category;
    }

    if let Some(size) = update.size {
        *details.size = size;
    }

    if let Some(purchase_price) = purchase_price {
        *details.purchase_price = purchase_price;
    }

    if let Some(sale) = details.sale.as_mut() {
        if let Some(sale_price) = sale_price {
            sale.sale_price = sale_price;
        }

        if let Some(shipping_cost) = shipping_cost {
            sale.shipping_cost = shipping_cost;
        }

        if let Some(fee) = fee {
            sale.fee = fee;
        }
    }

    Ok(())
}
