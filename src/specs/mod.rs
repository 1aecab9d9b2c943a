// src/specs/mod.rs
//! # Table “specs” module
//!
//! Each channel table on the status page gets a **spec**: a declarative
//! [`Schema`] saying which cell holds which field and how to read it, plus the
//! typed record that a decoded row turns into.
//!
//! ## What lives here
//! - **Column layout** (`Schema::downstream`, `Schema::upstream`): positional,
//!   because the page has no machine-readable column ids. A firmware that moves
//!   a column only needs its schema touched.
//! - **Row decoding** (`Schema::decode`, [`decode_row`]): cells → [`DecodedRow`] → record.
//! - **Records** (`DownstreamChannel`, `UpstreamChannel`).
//!
//! ## What does **not** live here
//! - **HTML**. Rows arrive as [`RawRow`]s of plain text from `core::html`.
//! - **Policy**. A bad row is an `Err`; whether to skip it or abort the table is
//!   up to `scrape`.
//!
//! ## Conventions & invariants
//! - A row needs `max(column index) + 1` cells, else `RowShape`.
//! - Every numeric field comes from exactly one column; failures name that column.
//! - Unit scaling is a property of the column (`Kind::Float { scale }`), never of
//!   the extractor.
use std::fmt;

pub use crate::core::cell::{Kind, Value};
pub use crate::core::html::RawRow;
use crate::core::cell;
use crate::error::{ParseError, Result};

pub mod downstream;
pub mod upstream;

pub use downstream::DownstreamChannel;
pub use upstream::UpstreamChannel;

/// Record fields a column can feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    ChannelId,
    Frequency,
    Power,
    Snr,
    Modulation,
    Octets,
    CorrectedErrors,
    UncorrectableErrors,
    ChannelType,
    SymbolRate,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ChannelId => "channel id",
            Field::Frequency => "frequency",
            Field::Power => "power",
            Field::Snr => "snr",
            Field::Modulation => "modulation",
            Field::Octets => "octets",
            Field::CorrectedErrors => "corrected errors",
            Field::UncorrectableErrors => "uncorrectable errors",
            Field::ChannelType => "channel type",
            Field::SymbolRate => "symbol rate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub field: Field,
    /// Cell position within the row (0-based, `<td>` only).
    pub index: usize,
    pub kind: Kind,
}

impl Column {
    pub fn new(field: Field, index: usize, kind: Kind) -> Self {
        Self { field, index, kind }
    }
}

/// Ordered column specs for one table.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn downstream() -> Self {
        downstream::schema()
    }

    pub fn upstream() -> Self {
        upstream::schema()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, field: Field) -> Option<&Column> {
        self.columns.iter().find(|c| c.field == field)
    }

    /// Fewest cells a row may have.
    pub fn min_cells(&self) -> usize {
        self.columns.iter().map(|c| c.index + 1).max().unwrap_or(0)
    }

    /// Every field in `fields` must be mapped to some column.
    pub fn require(&self, fields: &[Field]) -> Result<()> {
        let missing: Vec<&str> = fields
            .iter()
            .filter(|f| self.column(**f).is_none())
            .map(Field::as_str)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ParseError::InvalidSchema { reason: format!("unmapped fields: {}", missing.join(", ")) })
        }
    }

    /// Read every column of `row`. All-or-nothing: the first bad cell fails the row.
    pub fn decode(&self, row: &RawRow) -> Result<DecodedRow> {
        let expected = self.min_cells();
        if row.cells.len() < expected {
            return Err(ParseError::RowShape { row: row.index, expected, found: row.cells.len() });
        }

        let mut values = Vec::with_capacity(self.columns.len());
        for col in &self.columns {
            let raw = &row.cells[col.index];
            let value = cell::extract(raw, &col.kind).ok_or_else(|| ParseError::CellFormat {
                row: row.index,
                column: col.index,
                field: col.field,
                raw: raw.clone(),
            })?;
            values.push((col.field, value));
        }
        Ok(DecodedRow { values })
    }
}

/// Typed cell values of one row, looked up by field.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedRow {
    values: Vec<(Field, Value)>,
}

impl DecodedRow {
    fn get(&self, field: Field) -> Result<&Value> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v)
            .ok_or_else(|| ParseError::InvalidSchema { reason: format!("{field} is not mapped to a column") })
    }

    pub fn int(&self, field: Field) -> Result<i64> {
        match self.get(field)? {
            Value::Int(v) => Ok(*v),
            _ => Err(wrong_kind(field, "an integer")),
        }
    }

    pub fn float(&self, field: Field) -> Result<f64> {
        match self.get(field)? {
            Value::Float(v) => Ok(*v),
            _ => Err(wrong_kind(field, "a float")),
        }
    }

    pub fn text(&self, field: Field) -> Result<String> {
        match self.get(field)? {
            Value::Text(v) => Ok(v.clone()),
            _ => Err(wrong_kind(field, "text")),
        }
    }
}

fn wrong_kind(field: Field, wanted: &str) -> ParseError {
    ParseError::InvalidSchema { reason: format!("{field} must be read as {wanted}") }
}

/// A record built from one decoded table row.
pub trait Channel: Sized {
    /// Fields `from_row` reads; checked against the schema before any row.
    const FIELDS: &'static [Field];
    /// Column titles for export, same order as `to_row`.
    const HEADERS: &'static [&'static str];

    fn from_row(row: &DecodedRow) -> Result<Self>;
    fn to_row(&self) -> Vec<String>;
}

/// Cells → record in one go.
pub fn decode_row<T: Channel>(schema: &Schema, row: &RawRow) -> Result<T> {
    T::from_row(&schema.decode(row)?)
}
