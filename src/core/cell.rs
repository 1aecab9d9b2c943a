// src/core/cell.rs
// Text → value conversion for a single table cell.
// The modem renders values with units glued on ("611.0 MHz", "256QAM", "5120 kSym/s"),
// so every numeric kind reads only the leading token after optional stripping.

/// How a column's text becomes a value.
#[derive(Clone, Debug, PartialEq)]
pub enum Kind {
    /// Base-10 integer. `strip` is removed once (first occurrence) before tokenizing.
    Int { strip: Option<String> },
    /// Decimal float, multiplied by `scale` to reach the record's unit.
    Float { scale: f64 },
    /// Cell text as-is.
    Text,
}

impl Kind {
    pub fn int() -> Self { Kind::Int { strip: None } }
    pub fn int_stripping(s: &str) -> Self { Kind::Int { strip: Some(s!(s)) } }
    pub fn float() -> Self { Kind::Float { scale: 1.0 } }
    pub fn float_scaled(scale: f64) -> Self { Kind::Float { scale } }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Convert one cell's text. `None` when no parseable token is left.
pub fn extract(text: &str, kind: &Kind) -> Option<Value> {
    match kind {
        Kind::Int { strip } => as_int(text, strip.as_deref()).map(Value::Int),
        Kind::Float { scale } => as_float(text).map(|v| Value::Float(v * scale)),
        Kind::Text => Some(Value::Text(s!(text))),
    }
}

/// "611.0 MHz" → 611.0
pub fn as_float(text: &str) -> Option<f64> {
    leading_token(text)?.parse::<f64>().ok()
}

/// "256QAM" with strip "QAM" → 256, "5120 kSym/s" → 5120
pub fn as_int(text: &str, strip: Option<&str>) -> Option<i64> {
    match strip {
        Some(pat) if !pat.is_empty() => leading_token(&text.replacen(pat, "", 1))?.parse::<i64>().ok(),
        _ => leading_token(text)?.parse::<i64>().ok(),
    }
}

fn leading_token(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_reads_leading_token() {
        assert_eq!(as_float("611.0 MHz"), Some(611.0));
        assert_eq!(as_float("  -3.2\u{a0}dBmV"), Some(-3.2));
        assert_eq!(as_float("40.1"), Some(40.1));
    }

    #[test]
    fn float_rejects_garbage_and_blank() {
        assert_eq!(as_float("N/A"), None);
        assert_eq!(as_float(""), None);
        assert_eq!(as_float("   "), None);
        assert_eq!(as_float("MHz 611.0"), None);
    }

    #[test]
    fn int_strips_qam_once() {
        assert_eq!(as_int("256QAM", Some("QAM")), Some(256));
        assert_eq!(as_int("64QAM", Some("QAM")), Some(64));
        // only the first occurrence goes
        assert_eq!(as_int("16QAMQAM", Some("QAM")), None);
    }

    #[test]
    fn int_reads_leading_token() {
        assert_eq!(as_int("5120 kSym/s", None), Some(5120));
        assert_eq!(as_int("1234", None), Some(1234));
        assert_eq!(as_int("12.5", None), None);
        assert_eq!(as_int("QAM", Some("QAM")), None);
    }

    #[test]
    fn float_scale_belongs_to_the_kind() {
        assert_eq!(extract("611.0 MHz", &Kind::float_scaled(1000.0)), Some(Value::Float(611000.0)));
        assert_eq!(extract("611.0 MHz", &Kind::float()), Some(Value::Float(611.0)));
    }

    #[test]
    fn text_is_verbatim() {
        assert_eq!(extract(" ATDMA ", &Kind::Text), Some(Value::Text(s!(" ATDMA "))));
        assert_eq!(extract("", &Kind::Text), Some(Value::Text(s!())));
    }
}
