use std::time::Duration;

use crate::fetch::FetchSettings;

pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_IMAGE_SEARCH_ENDPOINT: &str = "https://api.pexels.com/v1/search";

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Whole-request timeout, generation included.
    pub timeout: Duration,
    pub api_key: String,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_COMPLETION_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 4096,
            timeout: Duration::from_secs(120),
            api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSearchSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ImageSearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_IMAGE_SEARCH_ENDPOINT.to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Everything the engine needs to process an item.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    pub completion: CompletionSettings,
    pub image_search: ImageSearchSettings,
    /// Look up a stock photo for every keyword placeholder in the result.
    pub suggest_images: bool,
}
