// file: src/session/http.rs
// description: reqwest-backed session that replays the user's cookie on every request
// reference: https://docs.rs/reqwest

use crate::config::Config;
use crate::error::{ExportError, Result};
use crate::models::WordListEnvelope;
use crate::session::context::SessionContext;
use crate::utils::Validator;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE, HeaderMap, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

const ERROR_BODY_PREVIEW: usize = 200;

pub struct HttpSession {
    client: Client,
    config: Config,
}

impl HttpSession {
    pub fn new(config: Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/html;q=0.9, */*;q=0.8"),
        );

        match config.session.cookie.as_deref().map(str::trim) {
            Some(cookie) if !cookie.is_empty() => {
                let mut value = HeaderValue::from_str(cookie).map_err(|e| {
                    ExportError::Config(format!("Session cookie is not a valid header value: {}", e))
                })?;
                value.set_sensitive(true);
                headers.insert(COOKIE, value);
            }
            _ => warn!("No session cookie configured, requests will be anonymous"),
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.endpoint.user_agent.clone())
            .timeout(Duration::from_secs(config.endpoint.timeout_secs))
            .build()
            .map_err(|e| ExportError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ExportError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ExportError::Http {
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(ExportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: Validator::truncate_text(&body, ERROR_BODY_PREVIEW),
            });
        }

        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[async_trait]
impl SessionContext for HttpSession {
    fn page_url(&self) -> &str {
        &self.config.endpoint.page_url
    }

    async fn page_document(&self) -> Result<String> {
        self.get_text(&self.config.endpoint.page_url).await
    }

    async fn fetch_words(&self, limit: u64, offset: u64) -> Result<WordListEnvelope> {
        let url = self.config.words_url(limit, offset);
        let body = self.get_text(&url).await?;

        serde_json::from_str(&body).map_err(|e| ExportError::Parse {
            url,
            message: e.to_string(),
        })
    }
}
