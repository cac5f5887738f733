use std::io::{self, Write};

use clap::{Parser, Subcommand};
use thriftlift::{
    config::{LoggingConfig, StoreConfig},
    records::InventoryRecord,
    report::{self, COLUMNS},
    store::InventoryStore,
};

mod add;
mod categories;
mod delete_sold;
mod edit;
mod export;
mod filter;
mod init;
mod list;
mod sell;
mod show;

#[derive(Debug, Parser)]
#[command(name = "thriftlift", about = "ThriftLift resale inventory", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    store: StoreConfig,

    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the inventory file if it does not exist
    Init,

    /// Show every item
    List,

    /// Show one item
    Show(show::ShowArgs),

    /// List a new item
    Add(add::AddArgs),

    /// Edit an item
    Edit(edit::EditArgs),

    /// Record the sale of an item
    Sell(sell::SellArgs),

    /// Remove every sold item
    DeleteSold,

    /// Show the items in one category
    Filter(filter::FilterArgs),

    /// List the categories in use
    Categories,

    /// Export the inventory report
    Export(export::ExportArgs),
}

impl Cli {
    pub(crate) fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub(crate) fn run(self, out: &mut impl Write) -> Result<(), String> {
        match self.command {
            Commands::Init => init::run(&self.store, out),
            Commands::List => list::run(&self.store, out),
            Commands::Show(args) => show::run(args, &self.store, out),
            Commands::Add(args) => add::run(args, &self.store, out),
            Commands::Edit(args) => edit::run(args, &self.store, out),
            Commands::Sell(args) => sell::run(args, &self.store, out),
            Commands::DeleteSold => delete_sold::run(&self.store, out),
            Commands::Filter(args) => filter::run(args, &self.store, out),
            Commands::Categories => categories::run(&self.store, out),
            Commands::Export(args) => export::run(args, &self.store, out),
        }
    }
}

fn open_store(config: &StoreConfig) -> Result<InventoryStore, String> {
    InventoryStore::open(config.inventory_file.clone()).map_err(|error| {
        format!(
            "failed to open {}: {error}",
            config.inventory_file.display()
        )
    })
}

fn write_record(out: &mut impl Write, record: &InventoryRecord) -> Result<(), String> {
    for (column, cell) in COLUMNS.iter().zip(report::cells(record)) {
        writeln!(out, "{}: {cell}", column.heading).map_err(write_failed)?;
    }

    Ok(())
}

fn write_failed(error: io::Error) -> String {
    format!("failed to write output: {error}")
}
