// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ExportError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "WORDBOOK_EXPORT";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub session: SessionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// Base URL the word-list API path is appended to.
    pub api_base: String,
    /// Landing page shown in the "please open ... first" notice.
    pub site_url: String,
    /// Wordbook page whose document is checked for the login marker.
    pub page_url: String,
    pub target_domain: String,
    pub probe_limit: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub cookie: Option<String>,
    pub login_marker: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub json_filename: String,
    pub csv_filename: String,
}

impl Config {
    /// Loads `path` when it exists, otherwise the built-in defaults; env
    /// overrides apply either way and any error is returned as-is.
    pub fn resolve(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(Some(path))
        } else {
            warn!(
                "Config file {} not found, using default configuration",
                path.display()
            );
            Self::load(None)
        }
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_with_env(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| ExportError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(env);

        let settings = builder
            .build()
            .map_err(|e| ExportError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ExportError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            endpoint: EndpointConfig {
                api_base: "https://dict.youdao.com".to_string(),
                site_url: "https://dict.youdao.com".to_string(),
                page_url: "https://dict.youdao.com/wordbook/wordlist".to_string(),
                target_domain: "youdao.com".to_string(),
                probe_limit: 15,
                timeout_secs: 30,
                user_agent: concat!("wordbook_export/", env!("CARGO_PKG_VERSION")).to_string(),
            },
            session: SessionConfig {
                cookie: None,
                login_marker: "user-info".to_string(),
            },
            output: OutputConfig {
                directory: PathBuf::from("."),
                json_filename: "words.json".to_string(),
                csv_filename: "words.csv".to_string(),
            },
        }
    }

    /// Endpoint URL for one page of the word list.
    pub fn words_url(&self, limit: u64, offset: u64) -> String {
        format!(
            "{}/wordbook/webapi/words?limit={}&offset={}",
            self.endpoint.api_base.trim_end_matches('/'),
            limit,
            offset
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.probe_limit == 0 {
            return Err(ExportError::Config(
                "probe_limit must be greater than 0".to_string(),
            ));
        }

        if self.endpoint.timeout_secs == 0 {
            return Err(ExportError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Validator::validate_url(&self.endpoint.api_base)?;
        Validator::validate_url(&self.endpoint.site_url)?;
        Validator::validate_url(&self.endpoint.page_url)?;

        if self.endpoint.target_domain.trim().is_empty() {
            return Err(ExportError::Config(
                "target_domain must not be empty".to_string(),
            ));
        }

        if self.session.login_marker.trim().is_empty() {
            return Err(ExportError::Config(
                "login_marker must not be empty".to_string(),
            ));
        }

        Validator::validate_file_name(&self.output.json_filename)?;
        Validator::validate_file_name(&self.output.csv_filename)?;

        if self.output.json_filename == self.output.csv_filename {
            return Err(ExportError::Config(
                "json_filename and csv_filename must differ".to_string(),
            ));
        }

        Ok(())
    }
}
