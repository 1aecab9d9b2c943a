// src/error.rs
//! Error types for parsing status pages and fetching them.
//!
//! A [`FetchError`] means the page never arrived. A [`ParseError`] means it
//! arrived but did not look like the page we know.

use std::io;

use thiserror::Error;

use crate::specs::Field;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("malformed document: {reason}")]
    MalformedDocument { reason: String },

    #[error("section not found: no heading containing {label:?} followed by a table")]
    SectionNotFound { label: String },

    #[error("row {row}: expected at least {expected} cells, found {found}")]
    RowShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {column} ({field}): cannot parse {raw:?}")]
    CellFormat {
        row: usize,
        column: usize,
        field: Field,
        raw: String,
    },

    #[error("invalid schema: {reason}")]
    InvalidSchema { reason: String },

    #[error("invalid heading selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

impl ParseError {
    /// Row-level failures are skipped; everything else is about the whole table.
    pub fn is_row_level(&self) -> bool {
        matches!(self, ParseError::RowShape { .. } | ParseError::CellFormat { .. })
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported scheme {0:?} (plain http only)")]
    UnsupportedScheme(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {status}")]
    Status { status: String },

    #[error("malformed HTTP response: {0}")]
    MalformedResponse(String),

    #[error("response body exceeds {limit} bytes")]
    TooLarge { limit: usize },
}

/// Either half of a scrape: getting the page, or reading it.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
}
