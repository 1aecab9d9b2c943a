// src/lib.rs
//! Scrape the downstream/upstream channel tables off a cable modem's
//! status page.
//!
//! ```no_run
//! use modem_scrape::{parse_document, ParseOptions};
//!
//! let page = std::fs::read("status_cgi.html")?;
//! let result = parse_document(&page, &ParseOptions::default())?;
//! for ch in result.downstream_channels() {
//!     println!("{} {} {}", ch.channel_id, ch.frequency_hz, ch.snr_db);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod export;
pub mod scrape;
pub mod specs;

pub use crate::config::options::{ExportOptions, FetchOptions, ParseOptions, TableSpec};
pub use crate::core::net::{Fetch, FileFetcher, HttpFetcher};
pub use error::{FetchError, ParseError, ScrapeError};
pub use export::{DelimitedExporter, Export};
pub use scrape::{parse_document, parse_reader, scrape, Direction, Issue, ParseResult};
pub use specs::{DownstreamChannel, Schema, UpstreamChannel};
