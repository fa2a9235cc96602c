use std::sync::Arc;

use engine_logging::{engine_debug, engine_info, engine_warn};
use rewriter_core::{
    build_system_prompt, build_user_message, image_links, is_platform_url, normalize_blog_url,
    parse_rewrite, reconcile_placeholders, ImagePattern, RewriteReport, RewriteStats, UrlError,
    EXPECTED_URL_EXAMPLE,
};

use crate::decode::decode_html;
use crate::error::PipelineError;
use crate::extract::{DocumentExtractor, GenericExtractor, PlatformExtractor, ScrapedDocument};
use crate::fetch::{Fetcher, ProgressSink};
use crate::generator::TextGenerator;
use crate::image_search::ImageFinder;
use crate::{EngineEvent, ItemId, Stage};

/// Fetch, extract, rewrite and reconcile one URL at a time.
pub struct RewritePipeline {
    fetcher: Arc<dyn Fetcher>,
    generator: Arc<dyn TextGenerator>,
    image_finder: Option<Arc<dyn ImageFinder>>,
}

impl RewritePipeline {
    pub fn new(fetcher: Arc<dyn Fetcher>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            fetcher,
            generator,
            image_finder: None,
        }
    }

    /// Suggest a stock photo for every keyword placeholder of the result.
    pub fn with_image_finder(mut self, finder: Arc<dyn ImageFinder>) -> Self {
        self.image_finder = Some(finder);
        self
    }

    /// Downloads `url` and extracts its text. Platform posts are fetched from
    /// their canonical mobile address.
    pub async fn scrape(
        &self,
        item_id: ItemId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<ScrapedDocument, PipelineError> {
        sink.emit(EngineEvent::stage(item_id, Stage::Normalizing));
        let url = url.trim();
        let (fetch_url, extractor): (String, &dyn DocumentExtractor) = if is_platform_url(url) {
            (normalize_blog_url(url)?, &PlatformExtractor)
        } else {
            url::Url::parse(url).map_err(|_| UrlError::InvalidUrl {
                url: url.to_string(),
                example: EXPECTED_URL_EXAMPLE,
            })?;
            (url.to_string(), &GenericExtractor)
        };
        engine_debug!("fetching {}", fetch_url);

        let page = self.fetcher.fetch(item_id, &fetch_url, sink).await?;
        let decoded = decode_html(
            &page.body,
            page.content_type.as_deref(),
            Some(&page.final_url),
        );
        engine_debug!(
            "decoded {} bytes as {}{}",
            page.body.len(),
            decoded.encoding_label,
            if decoded.had_errors { " (lossy)" } else { "" }
        );

        sink.emit(EngineEvent::stage(item_id, Stage::Extracting));
        let document = extractor.extract(&decoded.html, &fetch_url, &page.final_url)?;
        engine_debug!(
            "extracted {:?}: {} chars, {} image urls",
            document.title,
            document.content.chars().count(),
            document.image_urls.len()
        );
        Ok(document)
    }

    pub async fn process(
        &self,
        item_id: ItemId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<RewriteReport, PipelineError> {
        let url = url.trim();
        let document = self.scrape(item_id, url, sink).await?;

        sink.emit(EngineEvent::stage(item_id, Stage::Rewriting));
        let pattern = ImagePattern::analyze(&document.content);
        let system_prompt = build_system_prompt(&pattern);
        let user_message = build_user_message(&document.title, &document.content);
        let completion = self
            .generator
            .generate(&system_prompt, &user_message)
            .await?;

        sink.emit(EngineEvent::stage(item_id, Stage::Reconciling));
        let reconciled = reconcile_placeholders(&completion, &document.content);
        if reconciled.repaired {
            engine_warn!(
                "rewrite kept {} of {} image placeholders; re-inserted pattern {}",
                reconciled.actual,
                reconciled.expected,
                pattern
            );
        }
        let result = parse_rewrite(&reconciled.text);
        let stats = RewriteStats::compute(
            &document.content,
            &reconciled.text,
            document.image_urls.len(),
        );
        let mut links = image_links(&result.body, &document.image_urls);

        if let Some(finder) = &self.image_finder {
            sink.emit(EngineEvent::stage(item_id, Stage::SearchingImages));
            for link in links.iter_mut() {
                if let Some(keyword) = link.keyword.as_deref() {
                    link.suggested_url = finder.search(keyword).await;
                }
            }
        }

        sink.emit(EngineEvent::stage(item_id, Stage::Done));
        engine_info!(
            "rewrote {:?} ({} -> {} chars, similarity {:.2})",
            document.title,
            stats.original_len,
            stats.rewritten_len,
            stats.similarity
        );

        Ok(RewriteReport {
            url: url.to_string(),
            fetched_url: document.source_url,
            original_title: document.title,
            original_content: document.content,
            result,
            stats,
            image_links: links,
            source_image_urls: document.image_urls,
            repaired: reconciled.repaired,
        })
    }
}
