use std::path::{Path, PathBuf};
use std::time::Duration;

use rewriter_engine::{
    read_optional, CompletionSettings, EngineConfig, FetchSettings, ImageSearchSettings,
    PersistError, DEFAULT_COMPLETION_BASE_URL, DEFAULT_MODEL,
};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "rewriter.ron";
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";
pub const PEXELS_KEY_VAR: &str = "PEXELS_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: PersistError,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Settings file contents. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// When set, `rewrite` refuses to run without the matching password.
    pub access_password: Option<String>,
    pub openai_api_key: Option<String>,
    pub completion_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub completion_timeout_secs: u64,
    pub fetch_timeout_secs: u64,
    pub pexels_api_key: Option<String>,
    pub suggest_images: bool,
    /// Directory holding the submission history.
    pub state_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let completion = CompletionSettings::default();
        Self {
            access_password: None,
            openai_api_key: None,
            completion_base_url: DEFAULT_COMPLETION_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: completion.temperature,
            max_tokens: completion.max_tokens,
            completion_timeout_secs: completion.timeout.as_secs(),
            fetch_timeout_secs: FetchSettings::default().request_timeout.as_secs(),
            pexels_api_key: None,
            suggest_images: false,
            state_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = read_optional(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        match content {
            Some(text) => Self::parse(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            None => Ok(Self::default()),
        }
    }

    pub fn parse(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    /// Overlays API keys from the environment. `lookup` is `std::env::var`
    /// in production.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        if let Some(key) = non_empty(OPENAI_KEY_VAR) {
            self.openai_api_key = Some(key);
        }
        if let Some(key) = non_empty(PEXELS_KEY_VAR) {
            self.pexels_api_key = Some(key);
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            fetch: FetchSettings {
                request_timeout: Duration::from_secs(self.fetch_timeout_secs),
                ..FetchSettings::default()
            },
            completion: CompletionSettings {
                base_url: self.completion_base_url.clone(),
                model: self.model.clone(),
                temperature: self.temperature,
                max_tokens: self.max_tokens,
                timeout: Duration::from_secs(self.completion_timeout_secs),
                api_key: self.openai_api_key.clone().unwrap_or_default(),
            },
            image_search: ImageSearchSettings {
                api_key: self.pexels_api_key.clone(),
                ..ImageSearchSettings::default()
            },
            suggest_images: self.suggest_images,
        }
    }
}
