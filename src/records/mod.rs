//! Records

use jiff::civil::Date;
use rust_decimal::Decimal;

pub mod id;
pub mod status;

pub use id::RecordId;
pub use status::{Status, UnknownStatus};

/// Profit made on a sale, after the purchase price and selling costs.
pub fn profit(
    sale_price: Decimal,
    purchase_price: Decimal,
    shipping_cost: Decimal,
    fee: Decimal,
) -> Decimal {
    sale_price - purchase_price - shipping_cost - fee
}

/// Details recorded when an item is sold.
///
/// Sale details are all present or all absent, which keeps a record's status consistent
/// with its sale columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    /// Price the item sold for
    pub sale_price: Decimal,

    /// Postage paid by the seller
    pub shipping_cost: Decimal,

    /// Marketplace fee
    pub fee: Decimal,

    /// Date of the sale
    pub sold_date: Date,
}

/// One resale item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    id: RecordId,
    item_name: String,
    brand: String,
    category: String,
    size: String,
    purchase_price: Decimal,
    listed_date: Date,
    sale: Option<Sale>,
}

impl InventoryRecord {
    /// Create a listed record.
    pub(crate) fn listed(
        id: RecordId,
        item: ItemDetails,
        purchase_price: Decimal,
        listed_date: Date,
    ) -> Self {
        Self {
            id,
            item_name: item.item_name,
            brand: item.brand,
            category: item.category,
            size: item.size,
            purchase_price,
            listed_date,
            sale: None,
        }
    }

    /// Record identifier.
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Item name.
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Brand.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Category used for filtering.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Size.
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Price paid for the item.
    pub fn purchase_price(&self) -> Decimal {
        self.purchase_price
    }

    /// Date the item was listed.
    pub fn listed_date(&self) -> Date {
        self.listed_date
    }

    /// Sale details, once sold.
    pub fn sale(&self) -> Option<&Sale> {
        self.sale.as_ref()
    }

    /// `Sold` when sale details are present, otherwise `Listed`.
    pub fn status(&self) -> Status {
        if self.sale.is_some() {
            Status::Sold
        } else {
            Status::Listed
        }
    }

    /// Check whether the record has been sold.
    pub fn is_sold(&self) -> bool {
        self.sale.is_some()
    }

    /// Sale price, once sold.
    pub fn sale_price(&self) -> Option<Decimal> {
        self.sale.as_ref().map(|sale| sale.sale_price)
    }

    /// Shipping cost, once sold.
    pub fn shipping_cost(&self) -> Option<Decimal> {
        self.sale.as_ref().map(|sale| sale.shipping_cost)
    }

    /// Marketplace fee, once sold.
    pub fn fee(&self) -> Option<Decimal> {
        self.sale.as_ref().map(|sale| sale.fee)
    }

    /// Date of sale, once sold.
    pub fn sold_date(&self) -> Option<Date> {
        self.sale.as_ref().map(|sale| sale.sold_date)
    }

    /// Profit, once sold. Always derived from the current prices.
    pub fn profit(&self) -> Option<Decimal> {
        self.sale.as_ref().map(|sale| {
            profit(
                sale.sale_price,
                self.purchase_price,
                sale.shipping_cost,
                sale.fee,
            )
        })
    }

    pub(crate) fn details_mut(&mut self) -> DetailsMut<'_> {
        DetailsMut {
            item_name: &mut self.item_name,
            brand: &mut self.brand,
            category: &mut self.category,
            size: &mut self.size,
            purchase_price: &mut self.purchase_price,
            sale: &mut self.sale,
        }
    }

    pub(crate) fn with_sale(mut self, sale: Option<Sale>) -> Self {
        self.sale = sale;
        self
    }
}

/// Mutable view over the editable parts of a record. The id and listed date are not exposed.
pub(crate) struct DetailsMut<'a> {
    pub item_name: &'a mut String,
    pub brand: &'a mut String,
    pub category: &'a mut String,
    pub size: &'a mut String,
    pub purchase_price: &'a mut Decimal,
    pub sale: &'a mut Option<Sale>,
}

/// Free text describing an item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDetails {
    /// Item name
    pub item_name: String,

    /// Brand
    pub brand: String,

    /// Category
    pub category: String,

    /// Size
    pub size: String,
}

/// Input for creating a record, as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItem {
    /// Descriptive fields
    pub details: ItemDetails,

    /// Purchase price text, e.g. `20.00` or `$20.00`
    pub purchase_price: String,
}

/// Edits to a record. Only the fields that are `Some` are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    /// New item name
    pub item_name: Option<String>,

    /// New brand
    pub brand: Option<String>,

    /// New category
    pub category: Option<String>,

    /// New size
    pub size: Option<String>,

    /// New purchase price text
    pub purchase_price: Option<String>,

    /// New sale price text (sold records only)
    pub sale_price: Option<String>,

    /// New shipping cost text (sold records only)
    pub shipping_cost: Option<String>,

    /// New fee text (sold records only)
    pub fee: Option<String>,

    /// Status text; must match the current status
    pub status: Option<String>,
}

impl ItemUpdate {
    /// Check whether any sale detail is being edited.
    pub fn touches_sale(&self) -> bool {
        self.sale_price.is_some() || self.shipping_cost.is_some() || self.fee.is_some()
    }
}
