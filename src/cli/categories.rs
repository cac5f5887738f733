use std::io::Write;

use thriftlift::config::StoreConfig;

use super::{open_store, write_failed};

pub(crate) fn run(config: &StoreConfig, out: &mut impl Write) -> Result<(), String> {
    let store = open_store(config)?;

    for category in store.list_categories() {
        let category = if category.is_empty() {
            "(none)"
        } else {
            category
        };

        writeln!(out, "{category}").map_err(write_failed)?;
    }

    Ok(())
}
