use engine_logging::{engine_debug, engine_warn};
use serde::Deserialize;
use url::Url;

use crate::config::ImageSearchSettings;

/// Looks up a stock photo for a keyword. Failures are not errors: the
/// suggestion is simply absent.
#[async_trait::async_trait]
pub trait ImageFinder: Send + Sync {
    async fn search(&self, keyword: &str) -> Option<String>;
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Deserialize)]
struct Photo {
    src: PhotoSources,
}

#[derive(Deserialize)]
struct PhotoSources {
    medium: String,
}

#[derive(Debug, Clone)]
pub struct PexelsImageFinder {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl PexelsImageFinder {
    /// `None` when no API key is configured.
    pub fn from_settings(settings: &ImageSearchSettings) -> Option<Self> {
        let api_key = settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())?
            .to_string();
        let client = match reqwest::Client::builder().timeout(settings.timeout).build() {
            Ok(client) => client,
            Err(err) => {
                engine_warn!("image search disabled: {}", err);
                return None;
            }
        };
        Some(Self {
            endpoint: settings.endpoint.clone(),
            api_key,
            client,
        })
    }

    async fn try_search(&self, keyword: &str) -> Result<Option<String>, String> {
        let url = Url::parse_with_params(
            &self.endpoint,
            [("query", keyword), ("per_page", "1"), ("size", "medium")],
        )
        .map_err(|err| err.to_string())?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, self.api_key.as_str())
            .send()
            .await
            .map_err(|err| err.to_string())?
            .error_for_status()
            .map_err(|err| err.to_string())?;
        let body: SearchResponse = response.json().await.map_err(|err| err.to_string())?;
        Ok(body.photos.into_iter().next().map(|photo| photo.src.medium))
    }
}

#[async_trait::async_trait]
impl ImageFinder for PexelsImageFinder {
    async fn search(&self, keyword: &str) -> Option<String> {
        match self.try_search(keyword).await {
            Ok(found) => {
                engine_debug!("image search for {:?}: {}", keyword, found.is_some());
                found
            }
            Err(err) => {
                engine_warn!("image search for {:?} failed: {}", keyword, err);
                None
            }
        }
    }
}
