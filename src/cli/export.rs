use std::{io::Write, path::PathBuf};

use clap::{Args, ValueEnum};
use thriftlift::{
    config::{DEFAULT_REPORT_FILE, StoreConfig},
    report::Report,
};

use super::{open_store, write_failed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// Typst source for `typst compile`
    Typst,

    /// Terminal table on stdout
    Table,
}

#[derive(Debug, Args)]
pub(crate) struct ExportArgs {
    /// Only include items in this category
    #[arg(long)]
    category: Option<String>,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Typst)]
    format: ExportFormat,

    /// Where to write the Typst report
    #[arg(long, env = "REPORT_FILE", default_value = DEFAULT_REPORT_FILE)]
    out: PathBuf,
}

pub(crate) fn run(
    args: ExportArgs,
    config: &StoreConfig,
    out: &mut impl Write,
) -> Result<(), String> {
    let store = open_store(config)?;

    let mut report = match &args.category {
        Some(category) => Report::new(store.filter_by_category(category)),
        None => store.report(),
    };

    if let Some(title) = args.title {
        report = report.with_title(title);
    }

    match args.format {
        ExportFormat::Table => report.write_table(out).map_err(|error| error.to_string()),
        ExportFormat::Typst => {
            report
                .write_typst(&args.out)
                .map_err(|error| format!("{}: {error}", args.out.display()))?;

            writeln!(
                out,
                "wrote {} item(s) to {}; run `typst compile {}` for the PDF",
                report.len(),
                args.out.display(),
                args.out.display()
            )
            .map_err(write_failed)
        }
    }
}
