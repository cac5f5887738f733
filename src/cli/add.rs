use std::io::Write;

use clap::Args;
use thriftlift::{
    config::StoreConfig,
    records::{ItemDetails, NewItem},
};

use super::{open_store, write_record};

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Item name
    #[arg(long)]
    name: String,

    /// Brand
    #[arg(long, default_value = "")]
    brand: String,

    /// Category
    #[arg(long, default_value = "")]
    category: String,

    /// Size
    #[arg(long, default_value = "")]
    size: String,

    /// Purchase price, e.g. 20.00 or $20.00
    #[arg(long, allow_hyphen_values = true)]
    purchase_price: String,
}

pub(crate) fn run(args: AddArgs, config: &StoreConfig, out: &mut impl Write) -> Result<(), String> {
    let mut store = open_store(config)?;

    let record = store
        .create(NewItem {
            details: ItemDetails {
                item_name: args.name,
                brand: args.brand,
                category: args.category,
                size: args.size,
            },
            purchase_price: args.purchase_price,
        })
        .map_err(|error| format!("failed to list item: {error}"))?;

    write_record(out, &record)
}
