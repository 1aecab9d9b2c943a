// src/cli.rs
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::consts::{DEFAULT_MODEM_URL, IO_TIMEOUT_SECS};
use crate::config::options::{ExportFormat, ExportOptions, FetchOptions, ParseOptions, TableSelection};
use crate::core::net::{Fetch, FileFetcher, HttpFetcher};
use crate::export::{DelimitedExporter, Export};
use crate::scrape;

/// Read the channel tables off a cable modem status page.
#[derive(Parser, Debug)]
#[command(name = "modem_scrape", version, about)]
pub struct Args {
    /// Status page URL (plain http)
    #[arg(long, default_value = DEFAULT_MODEM_URL)]
    pub url: String,

    /// Read a saved page instead of fetching (overrides --url)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    #[arg(long, value_enum, default_value_t = Table::Both)]
    pub table: Table,

    /// Emit a header line before each table
    #[arg(long)]
    pub include_headers: bool,

    /// Read/write timeout in seconds
    #[arg(long, default_value_t = IO_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,

    /// -v info, -vv debug (RUST_LOG wins when set)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Table {
    Downstream,
    Upstream,
    Both,
}

impl Args {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            url: self.url.clone(),
            io_timeout: Duration::from_secs(self.timeout),
            ..FetchOptions::default()
        }
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            format: match self.format {
                Format::Csv => ExportFormat::Csv,
                Format::Tsv => ExportFormat::Tsv,
            },
            tables: match self.table {
                Table::Downstream => TableSelection::Downstream,
                Table::Upstream => TableSelection::Upstream,
                Table::Both => TableSelection::Both,
            },
            include_headers: self.include_headers,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let fetcher: Box<dyn Fetch> = match &args.file {
        Some(path) => Box::new(FileFetcher::new(path)),
        None => Box::new(HttpFetcher::new(args.fetch_options()).wrap_err("bad --url")?),
    };

    let result = scrape::scrape(fetcher.as_ref(), &ParseOptions::default())
        .wrap_err("could not read the modem status page")?;
    info!(
        downstream = result.downstream_channels().len(),
        upstream = result.upstream_channels().len(),
        issues = result.issues().len(),
        "parsed"
    );

    let stdout = io::stdout().lock();
    let mut exporter = DelimitedExporter::new(BufWriter::new(stdout), args.export_options());
    exporter.export(&result).wrap_err("writing output")?;
    Ok(())
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
