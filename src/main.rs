//! ThriftLift CLI

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use thriftlift::observability;

mod cli;

fn main() -> ExitCode {
    _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    if let Err(error) = observability::init_subscriber(cli.logging()) {
        _ = writeln!(io::stderr(), "{error}");
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();

    match cli.run(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(%error, "command failed");
            _ = writeln!(io::stderr(), "error: {error}");
            ExitCode::FAILURE
        }
    }
}
