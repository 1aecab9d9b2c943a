// src/scrape.rs
//! Page → `ParseResult`.
//!
//! Policy:
//! - **Tables are independent.** A table that can't be located (or whose schema
//!   doesn't fit its record) is reported as an [`Issue`]; the other table is
//!   still returned.
//! - **Rows are lenient.** A short row or an unreadable cell drops that row only,
//!   with a warning and an `Issue`. No partial records.
//!
//! Callers that want a single table strictly use [`read_downstream`] /
//! [`read_upstream`] and get the table failure as an `Err`.

use std::fmt;
use std::io::Read;

use tracing::{debug, warn};

use crate::config::options::{ParseOptions, TableSpec};
use crate::core::html::Document;
use crate::core::net::Fetch;
use crate::error::{ParseError, Result, ScrapeError};
use crate::specs::{decode_row, Channel, DownstreamChannel, UpstreamChannel};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Downstream,
    Upstream,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Downstream => f.write_str("downstream"),
            Direction::Upstream => f.write_str("upstream"),
        }
    }
}

/// Something that was not extracted, and from which table.
#[derive(Clone, Debug, PartialEq)]
pub struct Issue {
    pub direction: Direction,
    pub error: ParseError,
}

/// Both channel tables of one status page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseResult {
    downstream_channels: Vec<DownstreamChannel>,
    upstream_channels: Vec<UpstreamChannel>,
    issues: Vec<Issue>,
}

impl ParseResult {
    pub fn downstream_channels(&self) -> &[DownstreamChannel] {
        &self.downstream_channels
    }

    pub fn upstream_channels(&self) -> &[UpstreamChannel] {
        &self.upstream_channels
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Nothing skipped, nothing missing.
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }

    /// The whole table was lost (as opposed to a few rows).
    pub fn table_failed(&self, direction: Direction) -> bool {
        self.issues
            .iter()
            .any(|i| i.direction == direction && !i.error.is_row_level())
    }

    pub fn into_parts(self) -> (Vec<DownstreamChannel>, Vec<UpstreamChannel>) {
        (self.downstream_channels, self.upstream_channels)
    }
}

/// Records from one table plus the rows that were dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Extracted<T> {
    pub channels: Vec<T>,
    pub skipped: Vec<ParseError>,
}

/// Locate one table and decode its rows.
pub fn read_table<T: Channel>(doc: &Document, heading_selector: &str, spec: &TableSpec) -> Result<Extracted<T>> {
    spec.schema.require(T::FIELDS)?;

    let rows = doc.locate(heading_selector, &spec.label)?.rows(spec.skip_rows)?;

    let mut channels = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();
    for row in &rows {
        match decode_row::<T>(&spec.schema, row) {
            Ok(ch) => channels.push(ch),
            Err(e) if e.is_row_level() => {
                warn!(section = %spec.label, error = %e, "skipping row");
                skipped.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    debug!(section = %spec.label, channels = channels.len(), skipped = skipped.len(), "table read");
    Ok(Extracted { channels, skipped })
}

pub fn read_downstream(doc: &Document, opts: &ParseOptions) -> Result<Extracted<DownstreamChannel>> {
    read_table(doc, &opts.heading_selector, &opts.downstream)
}

pub fn read_upstream(doc: &Document, opts: &ParseOptions) -> Result<Extracted<UpstreamChannel>> {
    read_table(doc, &opts.heading_selector, &opts.upstream)
}

/// Parse a whole status page. Only unreadable input is an `Err`; everything
/// table-level ends up in [`ParseResult::issues`].
pub fn parse_document(bytes: &[u8], opts: &ParseOptions) -> Result<ParseResult> {
    let doc = Document::parse(bytes);
    Ok(parse_tree(&doc, opts))
}

pub fn parse_reader<R: Read>(reader: R, opts: &ParseOptions) -> Result<ParseResult> {
    let doc = Document::from_reader(reader)?;
    Ok(parse_tree(&doc, opts))
}

pub fn parse_tree(doc: &Document, opts: &ParseOptions) -> ParseResult {
    let mut issues = Vec::new();
    let downstream_channels = collect(Direction::Downstream, read_downstream(doc, opts), &mut issues);
    let upstream_channels = collect(Direction::Upstream, read_upstream(doc, opts), &mut issues);
    ParseResult { downstream_channels, upstream_channels, issues }
}

/// Fetch, then parse.
pub fn scrape(fetcher: &dyn Fetch, opts: &ParseOptions) -> std::result::Result<ParseResult, ScrapeError> {
    let body = fetcher.fetch()?;
    debug!(bytes = body.len(), "page fetched");
    Ok(parse_document(&body, opts)?)
}

/* ---------- helpers ---------- */

fn collect<T>(direction: Direction, read: Result<Extracted<T>>, issues: &mut Vec<Issue>) -> Vec<T> {
    match read {
        Ok(table) => {
            issues.extend(table.skipped.into_iter().map(|error| Issue { direction, error }));
            table.channels
        }
        Err(error) => {
            warn!(%direction, %error, "table not extracted");
            issues.push(Issue { direction, error });
            Vec::new()
        }
    }
}
