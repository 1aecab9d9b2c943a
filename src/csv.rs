// src/csv.rs
//! Delimited lines for channel export. Cells are already rendered by
//! `Channel::to_row`; only page text (`channel_type`) can carry a separator or quote.

use std::io::{self, Write};

fn needs_quotes(cell: &str, sep: char) -> bool {
    cell.chars().any(|c| c == sep || matches!(c, '"' | '\n' | '\r'))
}

/// One channel (or header) line, RFC 4180 quoting, `sep` between cells.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            w.write_all(cell.as_bytes())?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(row: &[&str], sep: char) -> String {
        let row: Vec<String> = row.iter().map(|c| s!(*c)).collect();
        let mut buf = Vec::new();
        write_row(&mut buf, &row, sep).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn quotes_only_when_needed() {
        assert_eq!(line(&["1", "611000", "ATDMA"], ','), "1,611000,ATDMA\n");
        assert_eq!(line(&["a,b", "say \"hi\""], ','), "\"a,b\",\"say \"\"hi\"\"\"\n");
        assert_eq!(line(&["a,b", "c"], '\t'), "a,b\tc\n");
    }

    #[test]
    fn channel_type_with_separator_stays_one_cell() {
        assert_eq!(line(&["upstream", "3", "TDMA\tATDMA"], '\t'), "upstream\t3\t\"TDMA\tATDMA\"\n");
        assert_eq!(line(&[], ','), "\n");
    }
}
