use std::io::Write;

use clap::Args;
use thriftlift::{config::StoreConfig, records::RecordId, store::errors::StoreError};

use super::{open_store, write_record};

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    /// Item id
    id: RecordId,
}

pub(crate) fn run(
    args: ShowArgs,
    config: &StoreConfig,
    out: &mut impl Write,
) -> Result<(), String> {
    let store = open_store(config)?;

    let record = store
        .find_by_id(args.id)
        .ok_or_else(|| StoreError::NotFound(args.id).to_string())?;

    write_record(out, record)
}
