use rewriter_core::UrlError;

use crate::extract::ExtractError;
use crate::generator::GenerateError;
use crate::FetchError;

/// Why an item produced no rewrite. Everything up to and including
/// extraction is reported as a crawl failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("크롤링 실패: {0}")]
    InvalidUrl(#[from] UrlError),
    #[error("크롤링 실패: {0}")]
    FetchFailed(#[from] FetchError),
    #[error("크롤링 실패: {0}")]
    ExtractionFailed(#[from] ExtractError),
    #[error("재작성 실패: {0}")]
    RewriteFailed(#[from] GenerateError),
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to set up http client: {0}")]
    HttpClient(#[from] FetchError),
    #[error("failed to set up completion client: {0}")]
    Generator(#[from] GenerateError),
}
