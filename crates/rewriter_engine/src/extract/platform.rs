use std::sync::LazyLock;

use engine_logging::engine_debug;
use rewriter_core::scrub_attribution;
use scraper::{ElementRef, Html, Selector};

use super::blocks::{image_sources, render_blocks, ContentBlock};
use super::text::visible_text;
use super::{DocumentExtractor, ExtractError, ScrapedDocument, FALLBACK_TITLE};

macro_rules! selector {
    ($name:ident, $css:literal) => {
        #[allow(clippy::expect_used)]
        static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).expect("valid selector"));
    };
}

selector!(TITLE_TEXT, "div.se-module-text.se-title-text");
selector!(LEGACY_TITLE, "div.tit_h3");
selector!(OG_TITLE, r#"meta[property="og:title"]"#);
selector!(MAIN_CONTAINER, "div.se-main-container");
selector!(LEGACY_VIEW_AREA, "div#postViewArea");
selector!(LEGACY_POST_CT, "div.post_ct");
selector!(MODULE, "div.se-module");
selector!(EMPHASIS, "strong, b");
selector!(IMAGE, "img");
selector!(CAPTION, "div.se-caption");

/// Extractor for posts hosted on the blog platform.
#[derive(Debug, Default)]
pub struct PlatformExtractor;

impl DocumentExtractor for PlatformExtractor {
    fn extract(
        &self,
        html: &str,
        source_url: &str,
        _base_url: &str,
    ) -> Result<ScrapedDocument, ExtractError> {
        // Editor image modules always carry absolute addresses.
        extract_platform_document(html, source_url)
    }
}

pub fn extract_platform_document(
    html: &str,
    source_url: &str,
) -> Result<ScrapedDocument, ExtractError> {
    let doc = Html::parse_document(html);
    let title = platform_title(&doc);

    let (content, image_urls) = if let Some(container) = doc.select(&MAIN_CONTAINER).next() {
        let blocks: Vec<ContentBlock> = container.select(&MODULE).filter_map(classify).collect();
        engine_debug!("platform post has {} content blocks", blocks.len());
        (scrub_attribution(&render_blocks(&blocks)), image_sources(&blocks))
    } else {
        // Legacy editor pages: plain text, no structure.
        let content = doc
            .select(&LEGACY_VIEW_AREA)
            .next()
            .or_else(|| doc.select(&LEGACY_POST_CT).next())
            .map(|container| visible_text(container, "\n"))
            .unwrap_or_default();
        (content, Vec::new())
    };

    if content.trim().is_empty() {
        return Err(ExtractError::EmptyPost);
    }

    Ok(ScrapedDocument {
        title,
        content,
        image_urls,
        source_url: source_url.to_string(),
    })
}

fn platform_title(doc: &Html) -> String {
    doc.select(&TITLE_TEXT)
        .next()
        .or_else(|| doc.select(&LEGACY_TITLE).next())
        .map(|el| visible_text(el, ""))
        .or_else(|| {
            doc.select(&OG_TITLE)
                .next()
                .and_then(|meta| meta.value().attr("content"))
                .map(|content| content.trim().to_string())
        })
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

fn classify(module: ElementRef<'_>) -> Option<ContentBlock> {
    if has_class(module, "se-module-text") {
        let text = visible_text(module, "\n");
        if text.is_empty() {
            return None;
        }
        let heading = module.select(&EMPHASIS).next().is_some();
        Some(ContentBlock::Text { text, heading })
    } else if has_class(module, "se-module-horizontalLine") {
        Some(ContentBlock::Rule)
    } else if has_class(module, "se-module-image") {
        let src = module
            .select(&IMAGE)
            .next()
            .and_then(|img| {
                let attr = |name| img.value().attr(name).filter(|v: &&str| !v.is_empty());
                attr("data-lazy-src").or_else(|| attr("src"))
            })
            .map(str::to_string);
        let caption = module
            .select(&CAPTION)
            .next()
            .map(|caption| visible_text(caption, ""))
            .filter(|caption| !caption.is_empty());
        Some(ContentBlock::Image { src, caption })
    } else if has_class(module, "se-module-oglink") {
        let text = visible_text(module, "");
        (!text.is_empty()).then_some(ContentBlock::Link { text })
    } else {
        None
    }
}
