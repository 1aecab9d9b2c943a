// src/core/sanitize.rs

/// Heading text and section labels are compared in this form: runs of Unicode
/// whitespace (`&nbsp;` and line breaks inside `<h4>` included) become one space,
/// ends trimmed.
pub fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
