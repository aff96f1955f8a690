// file: src/pipeline/orchestrator.rs
// description: coordinates the precondition checks, word-list fetch, rendering and file output
// reference: orchestrates one asynchronous export run

use crate::config::Config;
use crate::error::Result;
use crate::exporter::{ArtifactWriter, render_artifacts};
use crate::models::{ExportFormat, ExportReport};
use crate::pipeline::progress::ExportProgress;
use crate::session::{SessionContext, ensure_logged_in, ensure_target_page};
use crate::wordbook::{WordListFetcher, normalize};
use chrono::Utc;
use tracing::info;

const EXPORT_STEPS: usize = 5;

pub struct WordbookExporter<S: SessionContext> {
    config: Config,
    session: S,
    show_progress: bool,
    colored: bool,
}

impl<S: SessionContext> WordbookExporter<S> {
    pub fn new(config: Config, session: S) -> Self {
        Self {
            config,
            session,
            show_progress: false,
            colored: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool, colored: bool) -> Self {
        self.show_progress = show_progress;
        self.colored = colored;
        self
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    fn progress(&self, steps: usize) -> ExportProgress {
        if self.show_progress {
            ExportProgress::with_color(steps, self.colored)
        } else {
            ExportProgress::hidden(steps)
        }
    }

    /// Page must belong to the target site and show a signed-in user.
    /// Nothing is requested from the word-list endpoint here.
    pub async fn check_login(&self) -> Result<()> {
        ensure_target_page(
            self.session.page_url(),
            &self.config.endpoint.target_domain,
            &self.config.endpoint.site_url,
        )?;

        let document = self.session.page_document().await?;
        ensure_logged_in(&document, &self.config.session.login_marker)
    }

    /// Number of saved words, from the probe call alone.
    pub async fn count_words(&self) -> Result<u64> {
        self.check_login().await?;
        WordListFetcher::with_probe_limit(&self.session, self.config.endpoint.probe_limit)?
            .fetch_total()
            .await
    }

    /// Runs a full export. Every artifact is rendered before the first
    /// file is written, so a failed fetch or encode leaves nothing behind.
    pub async fn run(&self, formats: &[ExportFormat]) -> Result<ExportReport> {
        let formats = if formats.is_empty() {
            &ExportFormat::ALL[..]
        } else {
            formats
        };
        let mut progress = self.progress(EXPORT_STEPS);

        progress.advance("Checking login state");
        self.check_login().await?;

        progress.advance("Fetching word list");
        let fetched =
            WordListFetcher::with_probe_limit(&self.session, self.config.endpoint.probe_limit)?
                .fetch_all()
                .await?;

        progress.advance("Normalizing records");
        let records = normalize(fetched.records);

        progress.advance("Rendering files");
        let artifacts = render_artifacts(&records, formats, &self.config.output)?;

        progress.advance("Writing files");
        let writer = ArtifactWriter::new(&self.config.output.directory)?;
        let files = writer.write_all(&artifacts)?;

        progress.finish(&format!("Exported {} words", records.len()));
        info!(
            "Export finished in {:.2}s: {} words, {} files",
            progress.elapsed().as_secs_f64(),
            records.len(),
            files.len()
        );

        Ok(ExportReport {
            exported_at: Utc::now().to_rfc3339(),
            total_reported: fetched.total,
            words_exported: records.len(),
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::models::{RawWordRecord, WordListData, WordListEnvelope};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    const LOGGED_IN: &str = r#"<html><body><div class="user-info">me</div></body></html>"#;
    const LOGGED_OUT: &str = r#"<html><body><a class="login-btn">login</a></body></html>"#;

    struct FakeSession {
        page_url: String,
        document: String,
        total: u64,
        items: Vec<RawWordRecord>,
        page_loads: Mutex<usize>,
        fetches: Mutex<Vec<(u64, u64)>>,
    }

    impl FakeSession {
        fn new(document: &str, total: u64, items: Vec<RawWordRecord>) -> Self {
            Self {
                page_url: "https://dict.youdao.com/wordbook/wordlist".to_string(),
                document: document.to_string(),
                total,
                items,
                page_loads: Mutex::new(0),
                fetches: Mutex::new(Vec::new()),
            }
        }

        fn fetches(&self) -> Vec<(u64, u64)> {
            self.fetches.lock().unwrap().clone()
        }

        fn page_loads(&self) -> usize {
            *self.page_loads.lock().unwrap()
        }
    }

    #[async_trait]
    impl SessionContext for FakeSession {
        fn page_url(&self) -> &str {
            &self.page_url
        }

        async fn page_document(&self) -> Result<String> {
            *self.page_loads.lock().unwrap() += 1;
            Ok(self.document.clone())
        }

        async fn fetch_words(&self, limit: u64, offset: u64) -> Result<WordListEnvelope> {
            self.fetches.lock().unwrap().push((limit, offset));
            let item_list = if limit >= self.total {
                self.items.clone()
            } else {
                self.items.iter().take(limit as usize).cloned().collect()
            };
            Ok(WordListEnvelope {
                data: WordListData {
                    total: self.total,
                    item_list,
                },
                ..Default::default()
            })
        }
    }

    fn raw(word: &str, trans: &str) -> RawWordRecord {
        RawWordRecord {
            word: Some(word.to_string()),
            trans: Some(trans.to_string()),
            ..Default::default()
        }
    }

    fn config_in(dir: &TempDir) -> Config {
        let mut config = Config::default_config();
        config.output.directory = dir.path().join("out");
        config
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let dir = TempDir::new().unwrap();
        let session = FakeSession::new(
            LOGGED_IN,
            2,
            vec![raw("foo", "bar, baz"), raw("x", "y\"z")],
        );
        let exporter = WordbookExporter::new(config_in(&dir), session);

        let report = exporter.run(&ExportFormat::ALL).await.unwrap();

        assert_eq!(exporter.session().fetches(), vec![(15, 0), (2, 0)]);
        assert_eq!(report.total_reported, 2);
        assert_eq!(report.words_exported, 2);
        assert_eq!(report.files.len(), 2);

        let out = dir.path().join("out");
        let json = fs::read_to_string(out.join("words.json")).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"word\": \"foo\",\n    \"meaning\": \"bar, baz\"\n  },\n  {\n    \"word\": \"x\",\n    \"meaning\": \"y\\\"z\"\n  }\n]"
        );
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{"word":"foo","meaning":"bar, baz"},{"word":"x","meaning":"y\"z"}])
        );

        let csv = fs::read_to_string(out.join("words.csv")).unwrap();
        assert_eq!(csv, "word,meaning\r\nfoo,\"bar, baz\"\r\nx,\"y\"\"z\"");
    }

    #[tokio::test]
    async fn test_not_logged_in_never_fetches() {
        let dir = TempDir::new().unwrap();
        let session = FakeSession::new(LOGGED_OUT, 1, vec![raw("a", "b")]);
        let exporter = WordbookExporter::new(config_in(&dir), session);

        let err = exporter.run(&ExportFormat::ALL).await.unwrap_err();

        assert!(matches!(err, ExportError::NotLoggedIn));
        assert!(exporter.session().fetches().is_empty());
        assert!(!dir.path().join("out").exists());
    }

    #[tokio::test]
    async fn test_wrong_page_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let mut session = FakeSession::new(LOGGED_IN, 1, vec![raw("a", "b")]);
        session.page_url = "https://www.example.com/".to_string();
        let exporter = WordbookExporter::new(config_in(&dir), session);

        let err = exporter.run(&ExportFormat::ALL).await.unwrap_err();

        assert!(err.is_precondition());
        assert_eq!(err.to_string(), "please open https://dict.youdao.com first");
        assert_eq!(exporter.session().page_loads(), 0);
        assert!(exporter.session().fetches().is_empty());
    }

    #[tokio::test]
    async fn test_empty_word_book_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let session = FakeSession::new(LOGGED_IN, 0, Vec::new());
        let exporter = WordbookExporter::new(config_in(&dir), session);

        let err = exporter.run(&ExportFormat::ALL).await.unwrap_err();

        assert!(matches!(err, ExportError::EmptyRecords));
        assert!(!dir.path().join("out").exists());
    }

    #[tokio::test]
    async fn test_single_format_export() {
        let dir = TempDir::new().unwrap();
        let session = FakeSession::new(LOGGED_IN, 1, vec![raw("apple", "n. 苹果")]);
        let exporter = WordbookExporter::new(config_in(&dir), session);

        let report = exporter.run(&[ExportFormat::Csv]).await.unwrap();

        assert_eq!(report.files, vec![dir.path().join("out/words.csv")]);
        assert!(!dir.path().join("out/words.json").exists());
    }

    #[tokio::test]
    async fn test_count_words_uses_probe_only() {
        let dir = TempDir::new().unwrap();
        let session = FakeSession::new(LOGGED_IN, 42, vec![raw("a", "b")]);
        let exporter = WordbookExporter::new(config_in(&dir), session);

        assert_eq!(exporter.count_words().await.unwrap(), 42);
        assert_eq!(exporter.session().fetches(), vec![(15, 0)]);
    }
}
