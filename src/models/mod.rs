// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod artifact;
pub mod word;

pub use artifact::{ExportArtifact, ExportFormat, ExportReport};
pub use word::{RawWordRecord, WordListData, WordListEnvelope, WordRecord};
