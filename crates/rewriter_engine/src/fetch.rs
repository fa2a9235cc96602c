use std::sync::mpsc;
use std::time::Duration;

use engine_logging::engine_debug;
use futures_util::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, CONTENT_TYPE};

use crate::{EngineEvent, FetchError, FetchedPage, ItemId, Stage};

/// Mobile Safari user agent; the blog platform serves its module-based
/// markup to mobile browsers.
pub const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.0 Mobile/15E148 Safari/604.1";

const ACCEPT_LANGUAGE_VALUE: &str = "ko-KR,ko;q=0.9,en;q=0.8";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub html_media_types: Vec<String>,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(15),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
            html_media_types: vec!["text/html".into(), "application/xhtml+xml".into()],
            user_agent: MOBILE_USER_AGENT.to_string(),
        }
    }
}

/// Receives stage changes for the item being processed.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        // Receiver gone means nobody is watching any more.
        let _ = self.tx.send(event);
    }
}

pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn emit(&self, _event: EngineEvent) {}
}

/// Downloads a page. One GET, no retry.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(
        &self,
        item_id: ItemId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<FetchedPage, FetchError>;
}

pub struct ReqwestFetcher {
    client: reqwest::Client,
    max_bytes: u64,
    html_media_types: Vec<String>,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));

        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent)
            .default_headers(headers)
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        Ok(Self {
            client,
            max_bytes: settings.max_bytes,
            html_media_types: settings.html_media_types,
        })
    }

    fn is_html(&self, content_type: &str) -> bool {
        let media_type = content_type.split(';').next().unwrap_or_default().trim();
        self.html_media_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(media_type))
    }

    async fn read_body(
        &self,
        response: reqwest::Response,
        item_id: ItemId,
        sink: &dyn ProgressSink,
    ) -> Result<Vec<u8>, FetchError> {
        let limit = self.max_bytes;
        let mut body = Vec::new();
        sink.emit(EngineEvent::stage(item_id, Stage::Downloading));

        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(classify)?;
            let received = (body.len() + chunk.len()) as u64;
            if received > limit {
                return Err(FetchError::TooLarge { limit, received });
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(
        &self,
        item_id: ItemId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<FetchedPage, FetchError> {
        let target =
            reqwest::Url::parse(url).map_err(|err| FetchError::InvalidUrl(err.to_string()))?;

        engine_debug!("GET {}", target);
        let response = self.client.get(target).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        if let Some(received) = response.content_length().filter(|len| *len > self.max_bytes) {
            return Err(FetchError::TooLarge {
                limit: self.max_bytes,
                received,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        if let Some(ct) = content_type.as_deref().filter(|ct| !self.is_html(ct)) {
            return Err(FetchError::NotHtml(ct.to_string()));
        }

        let final_url = response.url().to_string();
        let body = self.read_body(response, item_id, sink).await?;
        engine_debug!("received {} bytes from {}", body.len(), final_url);

        Ok(FetchedPage {
            body,
            final_url,
            content_type,
        })
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_redirect() {
        FetchError::TooManyRedirects
    } else {
        FetchError::Network(err.to_string())
    }
}
