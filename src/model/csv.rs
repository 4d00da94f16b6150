// File: ./src/model/csv.rs
//! Minimal CSV reader for schedule exports.
//!
//! Lines are split on `\n` (an optional preceding `\r` is dropped) and cells on
//! `,`. There is no quoting or escaping: a value containing a comma or a line
//! break ends up split across cells or rows.
use std::collections::HashMap;

/// One data line, keyed by the (trimmed) header names.
pub type Row = HashMap<String, String>;

/// Parses `text` into rows. The first line is the header.
///
/// Every header and cell is trimmed. Cells missing at the end of a short line
/// are filled with empty strings; extra cells beyond the header are ignored.
pub fn parse_rows(text: &str) -> Vec<Row> {
    let mut lines = text
        .trim()
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    let headers: Vec<&str> = match lines.next() {
        Some(header_line) => header_line.split(',').map(str::trim).collect(),
        None => return Vec::new(),
    };

    lines
        .map(|line| {
            let cols: Vec<&str> = line.split(',').collect();
            headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    let value = cols.get(idx).map(|c| c.trim()).unwrap_or("");
                    (header.to_string(), value.to_string())
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_yields_no_rows() {
        assert!(parse_rows("Subject,Start Date\n").is_empty());
        assert!(parse_rows("").is_empty());
    }

    #[test]
    fn short_lines_are_padded() {
        let rows = parse_rows("a,b,c\n1");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[0]["b"], "");
        assert_eq!(rows[0]["c"], "");
    }

    #[test]
    fn duplicate_header_keeps_last_column() {
        let rows = parse_rows("x,x\nfirst,second");
        assert_eq!(rows[0]["x"], "second");
    }
}
