use std::io::Write;

use clap::Args;
use thriftlift::{
    config::StoreConfig,
    records::{ItemUpdate, RecordId},
};

use super::{open_store, write_record};

#[derive(Debug, Args)]
pub(crate) struct EditArgs {
    /// Item id
    id: RecordId,

    /// New item name
    #[arg(long)]
    name: Option<String>,

    /// New brand
    #[arg(long)]
    brand: Option<String>,

    /// New category
    #[arg(long)]
    category: Option<String>,

    /// New size
    #[arg(long)]
    size: Option<String>,

    /// New purchase price
    #[arg(long, allow_hyphen_values = true)]
    purchase_price: Option<String>,

    /// New sale price (sold items only)
    #[arg(long, allow_hyphen_values = true)]
    sale_price: Option<String>,

    /// New shipping cost (sold items only)
    #[arg(long, allow_hyphen_values = true)]
    shipping_cost: Option<String>,

    /// New eBay fee (sold items only)
    #[arg(long, allow_hyphen_values = true)]
    fee: Option<String>,

    /// Status; must match the item's current status
    #[arg(long)]
    status: Option<String>,
}

pub(crate) fn run(
    args: EditArgs,
    config: &StoreConfig,
    out: &mut impl Write,
) -> Result<(), String> {
    let mut store = open_store(config)?;

    let update = ItemUpdate {
        item_name: args.name,
        brand: args.brand,
        category: args.category,
        size: args.size,
        purchase_price: args.purchase_price,
        sale_price: args.sale_price,
        shipping_cost: args.shipping_cost,
        fee: args.fee,
        status: args.status,
    };

    let record = store
        .update(args.id, update)
        .map_err(|error| format!("failed to edit item {}: {error}", args.id))?;

    write_record(out, &record)
}
