// file: src/exporter/json.rs
// description: pretty-printed json rendering of the exported word list

use crate::error::Result;
use crate::models::WordRecord;

/// Two-space indented array of `{word, meaning}` objects.
pub fn encode(records: &[WordRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
