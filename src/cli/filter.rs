use std::io::Write;

use clap::Args;
use thriftlift::{
    config::StoreConfig,
    report::{DEFAULT_TITLE, Report},
};

use super::open_store;

#[derive(Debug, Args)]
pub(crate) struct FilterArgs {
    /// Category to match exactly
    category: String,
}

pub(crate) fn run(
    args: FilterArgs,
    config: &StoreConfig,
    out: &mut impl Write,
) -> Result<(), String> {
    let store = open_store(config)?;

    Report::new(store.filter_by_category(&args.category))
        .with_title(format!("{DEFAULT_TITLE}: {}", args.category))
        .write_table(out)
        .map_err(|error| error.to_string())
}
