use crate::placeholder::{count_placeholders, find_placeholders, IMAGE_MARKER};
use crate::sections::RewriteResult;
use crate::similarity::similarity_ratio;

/// Length and similarity figures shown next to each rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteStats {
    /// Characters in the extracted source content.
    pub original_len: usize,
    /// Placeholders in the source content.
    pub image_count: usize,
    /// Image URLs the extractor found; may be lower than `image_count`.
    pub source_image_count: usize,
    /// Characters in the reconciled completion text.
    pub rewritten_len: usize,
    pub similarity: f64,
}

impl RewriteStats {
    pub fn compute(original: &str, rewritten: &str, source_image_count: usize) -> Self {
        Self {
            original_len: original.chars().count(),
            image_count: count_placeholders(original),
            source_image_count,
            rewritten_len: rewritten.chars().count(),
            similarity: similarity_ratio(original, rewritten),
        }
    }
}

/// One placeholder of the rewritten body and whatever image is known for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLink {
    /// 1-based position among the body's placeholders.
    pub number: usize,
    pub keyword: Option<String>,
    /// Source image at the same position, when the source had that many.
    pub source_url: Option<String>,
    /// Image-search suggestion for `keyword`.
    pub suggested_url: Option<String>,
}

/// Pairs the body's placeholders with source image URLs by position.
pub fn image_links(body: &str, source_urls: &[String]) -> Vec<ImageLink> {
    find_placeholders(body)
        .into_iter()
        .enumerate()
        .map(|(idx, span)| ImageLink {
            number: idx + 1,
            keyword: span.keyword,
            source_url: source_urls.get(idx).cloned(),
            suggested_url: None,
        })
        .collect()
}

/// Rewrites `[이미지]` / `[이미지: k]` as `[이미지 1]` / `[이미지 1: k]`.
pub fn number_placeholders(body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 16);
    let mut cursor = 0;
    for (idx, span) in find_placeholders(body).into_iter().enumerate() {
        out.push_str(&body[cursor..span.range.start]);
        let number = idx + 1;
        match span.keyword {
            Some(keyword) => out.push_str(&format!("{IMAGE_MARKER} {number}: {keyword}]")),
            None => out.push_str(&format!("{IMAGE_MARKER} {number}]")),
        }
        cursor = span.range.end;
    }
    out.push_str(&body[cursor..]);
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct RewriteReport {
    /// URL as submitted.
    pub url: String,
    /// URL that was actually fetched.
    pub fetched_url: String,
    pub original_title: String,
    pub original_content: String,
    pub result: RewriteResult,
    pub stats: RewriteStats,
    pub image_links: Vec<ImageLink>,
    pub source_image_urls: Vec<String>,
    /// Whether placeholders had to be re-inserted.
    pub repaired: bool,
}

impl RewriteReport {
    /// Title, numbered body and hashtags, ready to paste into an editor.
    pub fn copy_ready_text(&self) -> String {
        let title = if self.result.title.is_empty() {
            self.original_title.as_str()
        } else {
            self.result.title.as_str()
        };
        let mut text = format!("{title}\n\n{}", number_placeholders(&self.result.body));
        if !self.result.hashtags.is_empty() {
            text.push_str("\n\n");
            text.push_str(&self.result.hashtags);
        }
        text
    }
}
