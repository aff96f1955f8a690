// file: src/exporter/csv.rs
// description: RFC 4180 style CSV encoding for uniformly shaped records
// reference: https://www.rfc-editor.org/rfc/rfc4180

use crate::error::{ExportError, Result};
use crate::models::WordRecord;
use std::borrow::Cow;

pub const ROW_SEPARATOR: &str = "\r\n";

/// A record type with a fixed column layout.
pub trait CsvRecord {
    const HEADERS: &'static [&'static str];

    /// Values in `HEADERS` order. Missing trailing values are emitted empty.
    fn values(&self) -> Vec<Option<&str>>;
}

impl CsvRecord for WordRecord {
    const HEADERS: &'static [&'static str] = &["word", "meaning"];

    fn values(&self) -> Vec<Option<&str>> {
        vec![self.word.as_deref(), self.meaning.as_deref()]
    }
}

/// Quotes a value when it holds a comma, quote, CR or LF; `None` is empty.
pub fn escape_value(value: Option<&str>) -> Cow<'_, str> {
    match value {
        None => Cow::Borrowed(""),
        Some(text) if text.contains([',', '"', '\r', '\n']) => {
            Cow::Owned(format!("\"{}\"", text.replace('"', "\"\"")))
        }
        Some(text) => Cow::Borrowed(text),
    }
}

fn encode_row<'v>(columns: usize, values: impl IntoIterator<Item = Option<&'v str>>) -> String {
    let mut values = values.into_iter();
    (0..columns)
        .map(|_| escape_value(values.next().flatten()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Header plus one row per record, CRLF separated, no trailing separator.
pub fn encode<R: CsvRecord>(records: &[R]) -> Result<String> {
    if records.is_empty() {
        return Err(ExportError::EmptyRecords);
    }

    let columns = R::HEADERS.len();
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(encode_row(columns, R::HEADERS.iter().map(|h| Some(*h))));
    rows.extend(
        records
            .iter()
            .map(|record| encode_row(columns, record.values())),
    );

    Ok(rows.join(ROW_SEPARATOR))
}
