// file: src/session/context.rs
// description: capability trait for the logged-in page and authenticated requests
// reference: async trait seam over a remote source

use crate::error::Result;
use crate::models::WordListEnvelope;
use async_trait::async_trait;

/// Everything the exporter needs from the user's browser session.
#[async_trait]
pub trait SessionContext: Send + Sync {
    /// URL of the page the session is looking at.
    fn page_url(&self) -> &str;

    /// Document of the loaded page, used for login detection.
    async fn page_document(&self) -> Result<String>;

    /// One page of the word list, fetched with the session's credentials.
    async fn fetch_words(&self, limit: u64, offset: u64) -> Result<WordListEnvelope>;
}
