// src/specs/upstream.rs
//! Upstream (transmit) channel table.
//!
//! Two header rows (column titles, then a channel-type grouping row), then:
//! `| label | UCID | Freq "36.0 MHz" | Power | Channel type | Symbol rate "5120 kSym/s" | Modulation "64QAM" |`
//!
//! Frequency stays in the unit the page shows; only the downstream table is scaled.

use super::{Channel, Column, DecodedRow, Field, Kind, Schema};
use crate::config::consts::QAM_SUFFIX;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct UpstreamChannel {
    pub channel_id: i64,
    pub frequency_hz: f64,
    pub power_dbmv: f64,
    pub channel_type: String,
    pub symbol_rate: i64,
    pub modulation_qam: i64,
}

pub fn schema() -> Schema {
    Schema::new(vec![
        Column::new(Field::ChannelId, 1, Kind::int()),
        Column::new(Field::Frequency, 2, Kind::float()),
        Column::new(Field::Power, 3, Kind::float()),
        Column::new(Field::ChannelType, 4, Kind::Text),
        Column::new(Field::SymbolRate, 5, Kind::int()),
        Column::new(Field::Modulation, 6, Kind::int_stripping(QAM_SUFFIX)),
    ])
}

impl Channel for UpstreamChannel {
    const FIELDS: &'static [Field] = &[
        Field::ChannelId,
        Field::Frequency,
        Field::Power,
        Field::ChannelType,
        Field::SymbolRate,
        Field::Modulation,
    ];
    const HEADERS: &'static [&'static str] = &[
        "Channel", "Frequency", "Power", "Channel type", "Symbol rate", "Modulation",
    ];

    fn from_row(row: &DecodedRow) -> Result<Self> {
        Ok(Self {
            channel_id: row.int(Field::ChannelId)?,
            frequency_hz: row.float(Field::Frequency)?,
            power_dbmv: row.float(Field::Power)?,
            channel_type: row.text(Field::ChannelType)?,
            symbol_rate: row.int(Field::SymbolRate)?,
            modulation_qam: row.int(Field::Modulation)?,
        })
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.channel_id.to_string(),
            self.frequency_hz.to_string(),
            self.power_dbmv.to_string(),
            self.channel_type.clone(),
            self.symbol_rate.to_string(),
            self.modulation_qam.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::specs::{decode_row, RawRow};

    fn cells(v: &[&str]) -> RawRow {
        RawRow { index: 2, cells: v.iter().map(|c| s!(*c)).collect() }
    }

    #[test]
    fn decodes_a_full_row() {
        let r = cells(&["Upstream 1", "2", "36.0 MHz", "45.25 dBmV", "ATDMA", "5120 kSym/s", "64QAM"]);
        let ch: UpstreamChannel = decode_row(&schema(), &r).unwrap();
        assert_eq!(ch, UpstreamChannel {
            channel_id: 2,
            frequency_hz: 36.0,
            power_dbmv: 45.25,
            channel_type: s!("ATDMA"),
            symbol_rate: 5120,
            modulation_qam: 64,
        });
    }

    #[test]
    fn frequency_is_not_scaled() {
        let r = cells(&["", "1", "611.0 MHz", "40", "TDMA", "2560", "16QAM"]);
        let ch: UpstreamChannel = decode_row(&schema(), &r).unwrap();
        assert_eq!(ch.frequency_hz, 611.0);
    }

    #[test]
    fn bad_symbol_rate_is_cell_format() {
        let r = cells(&["", "1", "36.0 MHz", "40", "TDMA", "-- kSym/s", "16QAM"]);
        let err = decode_row::<UpstreamChannel>(&schema(), &r).unwrap_err();
        assert!(matches!(err, ParseError::CellFormat { column: 5, field: Field::SymbolRate, .. }));
    }
}
