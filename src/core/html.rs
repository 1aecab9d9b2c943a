// src/core/html.rs
//! Document tree and table location.
//!
//! Everything that knows about the HTML tree lives here. Callers get a
//! [`Table`] back and read it as [`RawRow`]s of plain cell text, so the row
//! decoder and above never touch `scraper` types.
//!
//! Location rule: the first heading (document order) whose text contains the
//! label wins, and the table is the heading's next sibling *element*. Status
//! pages put an `<h4>` right before each `<table>`; anything fancier is a
//! firmware change and should surface as `SectionNotFound`.

use std::io::Read;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::sanitize::normalize_ws;
use crate::error::{ParseError, Result};

/// A parsed status page. Lives for one parse call.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse raw bytes. Never fails: markup errors are recovered by html5ever,
    /// and bytes that are not UTF-8 (Latin-1 footers are common on modem
    /// firmware) become U+FFFD.
    pub fn parse(bytes: &[u8]) -> Self {
        if let Err(e) = std::str::from_utf8(bytes) {
            debug!(offset = e.valid_up_to(), "page is not valid UTF-8; decoding lossily");
        }
        Self::parse_str(&String::from_utf8_lossy(bytes))
    }

    /// Drain `reader` and parse what it produced. Only a failed read is `MalformedDocument`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|e| ParseError::MalformedDocument { reason: format!("read failed: {e}") })?;
        Ok(Self::parse(&buf))
    }

    pub fn parse_str(text: &str) -> Self {
        let html = Html::parse_document(text);
        if !html.errors.is_empty() {
            debug!(count = html.errors.len(), "recovered from markup errors");
        }
        Self { html }
    }

    /// Find the table introduced by the first heading matching `label`.
    pub fn locate(&self, heading_selector: &str, label: &str) -> Result<Table<'_>> {
        let headings = selector(heading_selector)?;

        let wanted = normalize_ws(label);
        let heading = self
            .html
            .select(&headings)
            .find(|h| normalize_ws(&h.text().collect::<String>()).contains(&wanted))
            .ok_or_else(|| ParseError::SectionNotFound { label: s!(label) })?;

        let root = heading
            .next_siblings()
            .find_map(ElementRef::wrap)
            .ok_or_else(|| ParseError::SectionNotFound { label: s!(label) })?;

        debug!(label, element = root.value().name(), "located section");
        Ok(Table { root })
    }
}

/// The structural element that follows a section heading.
pub struct Table<'a> {
    root: ElementRef<'a>,
}

/// One `<tr>` flattened to the text of its `<td>` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRow {
    /// Position among all rows of the table, header rows included (0-based).
    pub index: usize,
    pub cells: Vec<String>,
}

impl<'a> Table<'a> {
    /// All rows in document order after dropping the first `skip`.
    pub fn rows(&self, skip: usize) -> Result<Vec<RawRow>> {
        let tr = selector("tr")?;
        let td = selector("td")?;

        let rows = self
            .root
            .select(&tr)
            .enumerate()
            .skip(skip)
            .map(|(index, row)| RawRow {
                index,
                cells: row.select(&td).map(cell_text).collect(),
            })
            .collect();
        Ok(rows)
    }
}

/// The cell's own text nodes, verbatim. Falls back to all descendant text
/// when the value is wrapped in markup (`<td><b>5</b></td>`).
pub fn cell_text(cell: ElementRef<'_>) -> String {
    let own: String = cell
        .children()
        .filter_map(|n| n.value().as_text())
        .map(|t| &**t)
        .collect();
    if own.trim().is_empty() {
        let nested: String = cell.text().collect();
        if !nested.trim().is_empty() {
            return nested;
        }
    }
    own
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ParseError::InvalidSelector {
        selector: s!(css),
        reason: e.to_string(),
    })
}
