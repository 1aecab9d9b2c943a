// src/export.rs
//! Rendering a `ParseResult` for someone else to consume.
//!
//! The only built-in sink is delimited text (CSV/TSV), one line per channel,
//! first column naming the table. A table whose section was not found is left
//! out entirely rather than written as empty.

use std::io::{self, Write};

use tracing::warn;

use crate::config::options::ExportOptions;
use crate::csv::write_row;
use crate::scrape::{Direction, ParseResult};
use crate::specs::Channel;

pub trait Export {
    fn export(&mut self, result: &ParseResult) -> io::Result<()>;
}

pub struct DelimitedExporter<W: Write> {
    out: W,
    opts: ExportOptions,
}

impl<W: Write> DelimitedExporter<W> {
    pub fn new(out: W, opts: ExportOptions) -> Self {
        Self { out, opts }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_table<T: Channel>(&mut self, direction: Direction, channels: &[T]) -> io::Result<()> {
        let sep = self.opts.format.delim();
        if self.opts.include_headers {
            let mut headers = vec![s!("Table")];
            headers.extend(T::HEADERS.iter().map(|h| s!(*h)));
            write_row(&mut self.out, &headers, sep)?;
        }
        let label = direction.to_string();
        for ch in channels {
            let mut row = Vec::with_capacity(T::HEADERS.len() + 1);
            row.push(label.clone());
            row.extend(ch.to_row());
            write_row(&mut self.out, &row, sep)?;
        }
        Ok(())
    }
}

impl<W: Write> Export for DelimitedExporter<W> {
    fn export(&mut self, result: &ParseResult) -> io::Result<()> {
        let tables = self.opts.tables;

        if tables.downstream() {
            if result.table_failed(Direction::Downstream) {
                warn!("downstream table unavailable; not exported");
            } else {
                self.write_table(Direction::Downstream, result.downstream_channels())?;
            }
        }
        if tables.upstream() {
            if result.table_failed(Direction::Upstream) {
                warn!("upstream table unavailable; not exported");
            } else {
                self.write_table(Direction::Upstream, result.upstream_channels())?;
            }
        }
        self.out.flush()
    }
}

/// Whole export as a string (tests, clipboard-style use).
pub fn to_export_string(result: &ParseResult, opts: &ExportOptions) -> String {
    let mut exporter = DelimitedExporter::new(Vec::new(), opts.clone());
    // Writing into a Vec cannot fail.
    let _ = exporter.export(result);

    match String::from_utf8(exporter.into_inner()) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
