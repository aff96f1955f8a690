// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod pipeline;
pub mod session;
pub mod utils;
pub mod wordbook;

pub use config::{Config, EndpointConfig, OutputConfig, SessionConfig};
pub use error::{ExportError, Result};
pub use exporter::{ArtifactWriter, CsvRecord, render_artifacts};
pub use models::{ExportArtifact, ExportFormat, ExportReport, RawWordRecord, WordRecord};
pub use pipeline::{ExportProgress, WordbookExporter};
pub use session::{HttpSession, SessionContext};
pub use utils::Validator;
pub use wordbook::{FetchedWordList, WordListFetcher, normalize};
