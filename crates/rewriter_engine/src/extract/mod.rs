//! Page-to-text extraction.
//!
//! Two variants share one output shape: the blog platform's editor markup is
//! walked module by module, anything else falls back to a visible-text pass
//! over the main content root.
mod blocks;
mod generic;
mod platform;
mod text;

pub use blocks::{image_sources, render_blocks, ContentBlock};
pub use generic::{extract_generic_document, GenericExtractor};
pub use platform::{extract_platform_document, PlatformExtractor};

/// Title used when a page offers none.
pub const FALLBACK_TITLE: &str = "제목 없음";

/// Text and image sources pulled out of one page. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedDocument {
    pub title: String,
    /// Plain text with `## ` headings, `---` rules and image placeholders.
    pub content: String,
    /// Image sources in document order. May be shorter than the placeholder
    /// count when an image module had no source.
    pub image_urls: Vec<String>,
    pub source_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("본문을 추출하지 못했습니다. 비공개 글이거나 지원하지 않는 형식일 수 있습니다.")]
    EmptyPost,
    #[error("본문을 추출하지 못했습니다.")]
    EmptyPage,
}

pub trait DocumentExtractor: Send + Sync {
    /// `source_url` is recorded on the document; relative references in the
    /// markup resolve against `base_url`, the address the page was served from.
    fn extract(
        &self,
        html: &str,
        source_url: &str,
        base_url: &str,
    ) -> Result<ScrapedDocument, ExtractError>;
}
