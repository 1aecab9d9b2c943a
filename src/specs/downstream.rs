// src/specs/downstream.rs
//! Downstream (receive) channel table.
//!
//! Row layout on the DG1670A status page, one header row then one row per channel:
//! `| label | DCID | Freq "611.0 MHz" | Power | SNR | Modulation "256QAM" | Octets | Correcteds | Uncorrectables |`

use super::{Channel, Column, DecodedRow, Field, Kind, Schema};
use crate::config::consts::{MHZ_TO_KHZ, QAM_SUFFIX};
use crate::error::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct DownstreamChannel {
    pub channel_id: i64,
    /// Page shows MHz; stored ×1000.
    pub frequency_hz: f64,
    pub power_dbmv: f64,
    pub snr_db: f64,
    pub modulation_qam: i64,
    pub octets: i64,
    pub corrected_errors: i64,
    pub uncorrectable_errors: i64,
}

pub fn schema() -> Schema {
    Schema::new(vec![
        Column::new(Field::ChannelId, 1, Kind::int()),
        Column::new(Field::Frequency, 2, Kind::float_scaled(MHZ_TO_KHZ)),
        Column::new(Field::Power, 3, Kind::float()),
        Column::new(Field::Snr, 4, Kind::float()),
        Column::new(Field::Modulation, 5, Kind::int_stripping(QAM_SUFFIX)),
        Column::new(Field::Octets, 6, Kind::int()),
        Column::new(Field::CorrectedErrors, 7, Kind::int()),
        Column::new(Field::UncorrectableErrors, 8, Kind::int()),
    ])
}

impl Channel for DownstreamChannel {
    const FIELDS: &'static [Field] = &[
        Field::ChannelId,
        Field::Frequency,
        Field::Power,
        Field::Snr,
        Field::Modulation,
        Field::Octets,
        Field::CorrectedErrors,
        Field::UncorrectableErrors,
    ];
    const HEADERS: &'static [&'static str] = &[
        "Channel", "Frequency", "Power", "SNR", "Modulation", "Octets", "Corrected", "Uncorrectable",
    ];

    fn from_row(row: &DecodedRow) -> Result<Self> {
        Ok(Self {
            channel_id: row.int(Field::ChannelId)?,
            frequency_hz: row.float(Field::Frequency)?,
            power_dbmv: row.float(Field::Power)?,
            snr_db: row.float(Field::Snr)?,
            modulation_qam: row.int(Field::Modulation)?,
            octets: row.int(Field::Octets)?,
            corrected_errors: row.int(Field::CorrectedErrors)?,
            uncorrectable_errors: row.int(Field::UncorrectableErrors)?,
        })
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.channel_id.to_string(),
            self.frequency_hz.to_string(),
            self.power_dbmv.to_string(),
            self.snr_db.to_string(),
            self.modulation_qam.to_string(),
            self.octets.to_string(),
            self.corrected_errors.to_string(),
            self.uncorrectable_errors.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{decode_row, RawRow};

    fn cells(v: &[&str]) -> RawRow {
        RawRow { index: 1, cells: v.iter().map(|c| s!(*c)).collect() }
    }

    #[test]
    fn decodes_a_full_row() {
        let r = cells(&["Downstream 1", "1", "611.0 MHz", "0.6 dBmV", "40.1 dB", "256QAM", "1234", "5", "2"]);
        let ch: DownstreamChannel = decode_row(&schema(), &r).unwrap();
        assert_eq!(ch, DownstreamChannel {
            channel_id: 1,
            frequency_hz: 611000.0,
            power_dbmv: 0.6,
            snr_db: 40.1,
            modulation_qam: 256,
            octets: 1234,
            corrected_errors: 5,
            uncorrectable_errors: 2,
        });
    }

    #[test]
    fn modulation_is_the_number_before_qam() {
        for (raw, want) in [("256QAM", 256), ("64QAM", 64), ("16QAM", 16)] {
            let r = cells(&["", "1", "611.0 MHz", "0", "0", raw, "0", "0", "0"]);
            let ch: DownstreamChannel = decode_row(&schema(), &r).unwrap();
            assert_eq!(ch.modulation_qam, want, "{raw}");
        }
    }

    #[test]
    fn to_row_matches_headers() {
        let r = cells(&["", "3", "623.0 MHz", "-1.5", "38.9", "256QAM", "99", "0", "0"]);
        let ch: DownstreamChannel = decode_row(&schema(), &r).unwrap();
        let out = ch.to_row();
        assert_eq!(out.len(), DownstreamChannel::HEADERS.len());
        assert_eq!(out[1], "623000");
        assert_eq!(out[2], "-1.5");
    }
}
