//! ThriftLift
//!
//! ThriftLift tracks second-hand items bought for resale. Each item is listed with what it cost,
//! marked sold with its sale price, shipping cost and marketplace fee, and the profit is worked
//! out from those. Records live in a single CSV file that is rewritten atomically on every
//! change, and the inventory can be exported as a printable report.

pub mod clock;
pub mod config;
pub mod money;
pub mod observability;
pub mod prelude;
pub mod records;
pub mod report;
pub mod store;
