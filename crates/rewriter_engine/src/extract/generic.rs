use std::sync::LazyLock;

use engine_logging::engine_debug;
use rewriter_core::IMAGE_PLACEHOLDER;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::text::{Replacement, TextCollector};
use super::{DocumentExtractor, ExtractError, ScrapedDocument, FALLBACK_TITLE};

#[allow(clippy::expect_used)]
static OG_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[property="og:title"]"#).expect("valid selector"));
#[allow(clippy::expect_used)]
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid selector"));
#[allow(clippy::expect_used)]
static CONTENT_ROOTS: LazyLock<[Selector; 3]> = LazyLock::new(|| {
    ["article", "[role='main']", "body"].map(|css| Selector::parse(css).expect("valid selector"))
});

/// Subtrees that carry page chrome rather than content.
const SKIPPED: &[&str] = &[
    "script", "style", "noscript", "template", "nav", "header", "footer", "aside", "iframe",
];

/// Image source attributes, most specific first.
const IMAGE_SOURCE_ATTRS: [&str; 3] = ["data-lazy-src", "data-src", "src"];

/// Extractor for arbitrary web pages.
#[derive(Debug, Default)]
pub struct GenericExtractor;

impl DocumentExtractor for GenericExtractor {
    fn extract(
        &self,
        html: &str,
        source_url: &str,
        base_url: &str,
    ) -> Result<ScrapedDocument, ExtractError> {
        extract_generic_document(html, source_url, base_url)
    }
}

pub fn extract_generic_document(
    html: &str,
    source_url: &str,
    base_url: &str,
) -> Result<ScrapedDocument, ExtractError> {
    let doc = Html::parse_document(html);
    let title = generic_title(&doc);

    let root = CONTENT_ROOTS
        .iter()
        .find_map(|selector| doc.select(selector).next())
        .ok_or(ExtractError::EmptyPage)?;

    let base = Url::parse(base_url).ok();
    let mut image_urls = Vec::new();
    let mut collector = TextCollector::new(SKIPPED);
    collector.collect(root, &mut |element: ElementRef<'_>| {
        if !element.value().name().eq_ignore_ascii_case("img") {
            return None;
        }
        match image_source(element) {
            Some(src) => {
                image_urls.push(resolve_image_url(src, base.as_ref()));
                Some(Replacement::Text(IMAGE_PLACEHOLDER.to_string()))
            }
            None => Some(Replacement::Drop),
        }
    });
    let content = collector.join("\n");

    if content.trim().is_empty() {
        return Err(ExtractError::EmptyPage);
    }
    engine_debug!(
        "generic page: {} chars, {} images",
        content.chars().count(),
        image_urls.len()
    );

    Ok(ScrapedDocument {
        title,
        content,
        image_urls,
        source_url: source_url.to_string(),
    })
}

fn generic_title(doc: &Html) -> String {
    doc.select(&OG_TITLE)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .or_else(|| {
            doc.select(&TITLE)
                .next()
                .map(|title| title.text().map(str::trim).collect::<String>())
                .filter(|title| !title.is_empty())
        })
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

fn image_source(img: ElementRef<'_>) -> Option<&str> {
    IMAGE_SOURCE_ATTRS
        .iter()
        .filter_map(|attr| img.value().attr(attr))
        .find(|value| !value.is_empty())
        .filter(|value| !value.starts_with("data:"))
}

fn resolve_image_url(src: &str, base: Option<&Url>) -> String {
    if Url::parse(src).is_ok() {
        return src.to_string();
    }
    base.and_then(|base| base.join(src).ok())
        .map(String::from)
        .unwrap_or_else(|| src.to_string())
}
