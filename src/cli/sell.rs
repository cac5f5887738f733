use std::io::Write;

use clap::Args;
use thriftlift::{config::StoreConfig, records::RecordId};

use super::{open_store, write_record};

#[derive(Debug, Args)]
pub(crate) struct SellArgs {
    /// Item id
    id: RecordId,

    /// Sale price
    #[arg(long, allow_hyphen_values = true)]
    sale_price: String,

    /// Shipping cost
    #[arg(long, allow_hyphen_values = true)]
    shipping_cost: String,

    /// eBay fee
    #[arg(long, allow_hyphen_values = true)]
    fee: String,
}

pub(crate) fn run(
    args: SellArgs,
    config: &StoreConfig,
    out: &mut impl Write,
) -> Result<(), String> {
    let mut store = open_store(config)?;

    let record = store
        .mark_sold(args.id, &args.sale_price, &args.shipping_cost, &args.fee)
        .map_err(|error| format!("failed to sell item {}: {error}", args.id))?;

    write_record(out, &record)
}
