// file: src/wordbook/normalizer.rs
// description: reduces server records to the exported {word, meaning} shape

use crate::models::{RawWordRecord, WordRecord};

/// Renames `trans` to `meaning` and drops every other field, keeping order.
pub fn normalize(records: Vec<RawWordRecord>) -> Vec<WordRecord> {
    records.into_iter().map(WordRecord::from).collect()
}
