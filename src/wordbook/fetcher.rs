// file: src/wordbook/fetcher.rs
// description: count-then-fetch-all retrieval of the saved word list
// reference: two sequential requests against the paginated word-list endpoint

use crate::error::{ExportError, Result};
use crate::models::RawWordRecord;
use crate::session::SessionContext;
use tracing::{debug, info, warn};

pub const DEFAULT_PROBE_LIMIT: u64 = 15;

#[derive(Debug, Clone, Default)]
pub struct FetchedWordList {
    /// Count reported by the probe call.
    pub total: u64,
    pub records: Vec<RawWordRecord>,
}

pub struct WordListFetcher<'a, S: SessionContext + ?Sized> {
    session: &'a S,
    probe_limit: u64,
}

impl<'a, S: SessionContext + ?Sized> WordListFetcher<'a, S> {
    pub fn new(session: &'a S) -> Self {
        Self {
            session,
            probe_limit: DEFAULT_PROBE_LIMIT,
        }
    }

    pub fn with_probe_limit(session: &'a S, probe_limit: u64) -> Result<Self> {
        if probe_limit == 0 {
            return Err(ExportError::Validation(
                "probe limit must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            session,
            probe_limit,
        })
    }

    /// Probe call: a small page requested only for `data.total`.
    pub async fn fetch_total(&self) -> Result<u64> {
        let envelope = self.session.fetch_words(self.probe_limit, 0).await?;
        debug!(
            "Probe returned code={:?}, msg={:?}",
            envelope.code, envelope.msg
        );
        Ok(envelope.into_data()?.total)
    }

    /// Probe for the total, then request every word in a single page.
    ///
    /// The list may change between the two calls; the second response is
    /// returned as-is.
    pub async fn fetch_all(&self) -> Result<FetchedWordList> {
        let total = self.fetch_total().await?;
        info!("Word book reports {} saved words", total);

        if total == 0 {
            return Ok(FetchedWordList::default());
        }

        let envelope = self.session.fetch_words(total, 0).await?;
        let records = envelope.into_data()?.item_list;

        if records.len() as u64 != total {
            warn!(
                "Word list changed while exporting: expected {} words, received {}",
                total,
                records.len()
            );
        }

        Ok(FetchedWordList { total, records })
    }
}
