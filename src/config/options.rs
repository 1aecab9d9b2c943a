// src/config/options.rs
use std::time::Duration;

use super::consts::*;
use crate::specs::Schema;

/// Everything the parser needs to find and read both channel tables.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOptions {
    /// CSS selector for candidate section headings.
    pub heading_selector: String,
    pub downstream: TableSpec,
    pub upstream: TableSpec,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            heading_selector: s!(HEADING_SELECTOR),
            downstream: TableSpec::downstream(),
            upstream: TableSpec::upstream(),
        }
    }
}

/// One table on the page: which heading introduces it, how many leading rows
/// are headings, and what each data column holds.
#[derive(Clone, Debug, PartialEq)]
pub struct TableSpec {
    pub label: String,
    pub skip_rows: usize,
    pub schema: Schema,
}

impl TableSpec {
    pub fn downstream() -> Self {
        Self {
            label: s!(DOWNSTREAM_LABEL),
            skip_rows: DOWNSTREAM_SKIP_ROWS,
            schema: Schema::downstream(),
        }
    }

    pub fn upstream() -> Self {
        Self {
            label: s!(UPSTREAM_LABEL),
            skip_rows: UPSTREAM_SKIP_ROWS,
            schema: Schema::upstream(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub url: String,
    pub connect_timeout: Duration,
    pub io_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_MODEM_URL),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            io_timeout: Duration::from_secs(IO_TIMEOUT_SECS),
            max_body_bytes: MAX_BODY_BYTES,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/// Which channel tables to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TableSelection {
    Downstream,
    Upstream,
    #[default]
    Both,
}

impl TableSelection {
    pub fn downstream(&self) -> bool {
        matches!(self, TableSelection::Downstream | TableSelection::Both)
    }
    pub fn upstream(&self) -> bool {
        matches!(self, TableSelection::Upstream | TableSelection::Both)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub tables: TableSelection,
    pub include_headers: bool,
}
