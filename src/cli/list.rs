use std::io::Write;

use thriftlift::{config::StoreConfig, report::Report};

use super::open_store;

pub(crate) fn run(config: &StoreConfig, out: &mut impl Write) -> Result<(), String> {
    let mut store = open_store(config)?;

    let records = store
        .load_all()
        .map_err(|error| format!("failed to load inventory: {error}"))?;

    Report::new(&records)
        .write_table(out)
        .map_err(|error| error.to_string())
}
