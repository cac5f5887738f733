//! ThriftLift prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    clock::{Clock, FixedClock, SystemClock},
    money::{AmountError, display_amount, format_amount, parse_amount},
    records::{
        InventoryRecord, ItemDetails, ItemUpdate, NewItem, RecordId, Sale, Status, UnknownStatus,
    },
    report::{Report, ReportError},
    store::{
        InventoryStore,
        codec::{DecodeError, UnreadableRow},
        errors::{AmountField, StorageError, StoreError, ValidationError},
        initialize,
    },
};
