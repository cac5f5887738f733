use std::io::Write;

use thriftlift::{config::StoreConfig, store};

use super::write_failed;

pub(crate) fn run(config: &StoreConfig, out: &mut impl Write) -> Result<(), String> {
    let path = &config.inventory_file;

    let created = store::initialize(path)
        .map_err(|error| format!("failed to create {}: {error}", path.display()))?;

    if created {
        writeln!(out, "created {}", path.display()).map_err(write_failed)
    } else {
        writeln!(out, "{} already exists", path.display()).map_err(write_failed)
    }
}
