use std::io::Write;

use thriftlift::config::StoreConfig;

use super::{open_store, write_failed};

pub(crate) fn run(config: &StoreConfig, out: &mut impl Write) -> Result<(), String> {
    let mut store = open_store(config)?;

    let removed = store
        .delete_sold()
        .map_err(|error| format!("failed to delete sold items: {error}"))?;

    writeln!(out, "deleted {removed} sold item(s)").map_err(write_failed)
}
