//! Store errors.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io,
};

use thiserror::Error;

use crate::{
    money::AmountError,
    records::{RecordId, Status, UnknownStatus},
};

/// Monetary input named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    /// Purchase price
    PurchasePrice,

    /// Sale price
    SalePrice,

    /// Shipping cost
    ShippingCost,

    /// Marketplace fee
    Fee,
}

impl Display for AmountField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            AmountField::PurchasePrice => "purchase price",
            AmountField::SalePrice => "sale price",
            AmountField::ShippingCost => "shipping cost",
            AmountField::Fee => "eBay fee",
        })
    }
}

/// User input that was rejected. The store is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A monetary field did not parse.
    #[error("invalid {field}: {source}")]
    Amount {
        /// Field that failed
        field: AmountField,
        /// Parse failure
        source: AmountError,
    },

    /// Status text was not recognised.
    #[error(transparent)]
    Status(#[from] UnknownStatus),

    /// The record was already sold.
    #[error("item {0} is already sold")]
    AlreadySold(RecordId),

    /// Sale details were edited on a record that has not been sold.
    #[error("item {0} has not been sold; record the sale with mark-sold first")]
    NotSold(RecordId),

    /// A status change was requested outside of marking an item sold.
    #[error("item {id} cannot change status from {from} to {to}")]
    StatusChange {
        /// Record being edited
        id: RecordId,
        /// Current status
        from: Status,
        /// Requested status
        to: Status,
    },
}

/// Failure reading or writing the inventory file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file error.
    #[error("inventory file error: {0}")]
    Io(#[from] io::Error),

    /// CSV encoding or decoding error.
    #[error("inventory file is not valid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The rewritten file could not be moved into place.
    #[error("failed to replace inventory file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Errors returned by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Invalid input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record has the requested id.
    #[error("item {0} not found")]
    NotFound(RecordId),

    /// The inventory file could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        Self::Storage(StorageError::Io(error))
    }
}

impl From<csv::Error> for StoreError {
    fn from(error: csv::Error) -> Self {
        Self::Storage(StorageError::Csv(error))
    }
}

impl From<tempfile::PersistError> for StoreError {
    fn from(error: tempfile::PersistError) -> Self {
        Self::Storage(StorageError::Persist(error))
    }
}

/// Build a closure mapping an amount parse failure to a [`ValidationError`] for `field`.
pub(crate) fn invalid_amount(field: AmountField) -> impl FnOnce(AmountError) -> ValidationError {
    move |source| ValidationError::Amount { field, source }
}
