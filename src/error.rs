// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("please open {site_url} first")]
    WrongPage { site_url: String, page_url: String },

    #[error("please log in before exporting your word book")]
    NotLoggedIn,

    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    #[error("Request to {url} returned status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Failed to parse response from {url}: {message}")]
    Parse { url: String, message: String },

    #[error("Word-list endpoint rejected the request (code {code}): {message}")]
    Api { code: i64, message: String },

    #[error("CSV encoding requires a non-empty list of records")]
    EmptyRecords,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Export only partially written ({written:?} saved) before failing: {source}")]
    PartialExport {
        written: Vec<PathBuf>,
        source: Box<ExportError>,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Failures the user can fix themselves (wrong page, not logged in).
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::WrongPage { .. } | Self::NotLoggedIn)
    }
}
