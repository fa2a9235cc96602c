/// Prefix shared by every image placeholder, with or without a keyword.
pub const IMAGE_MARKER: &str = "[이미지";

/// Placeholder emitted when no keyword is known.
pub const IMAGE_PLACEHOLDER: &str = "[이미지]";

/// Prefix of link-card placeholders.
pub const LINK_MARKER: &str = "[링크:";

/// Number of placeholder tokens in `text`.
pub fn count_placeholders(text: &str) -> usize {
    text.matches(IMAGE_MARKER).count()
}

/// Placeholder text for an image, carrying its caption as keyword when present.
pub fn image_placeholder(keyword: Option<&str>) -> String {
    match keyword.map(str::trim).filter(|k| !k.is_empty()) {
        Some(keyword) => format!("{IMAGE_MARKER}: {keyword}]"),
        None => IMAGE_PLACEHOLDER.to_string(),
    }
}

/// A placeholder located in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSpan {
    /// Byte range of the whole token, brackets included.
    pub range: std::ops::Range<usize>,
    /// Keyword after `: `, if any.
    pub keyword: Option<String>,
}

/// Locates every well-formed placeholder token in `text`, in order.
///
/// A marker without a closing bracket on the same line is skipped.
pub fn find_placeholders(text: &str) -> Vec<PlaceholderSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    while let Some(offset) = text[cursor..].find(IMAGE_MARKER) {
        let start = cursor + offset;
        let after_marker = start + IMAGE_MARKER.len();
        let rest = &text[after_marker..];
        let close = rest
            .find(|c: char| c == ']' || c == '\n')
            .filter(|&idx| rest[idx..].starts_with(']'));
        match close {
            Some(idx) => {
                let inner = &rest[..idx];
                let keyword = inner
                    .strip_prefix(':')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(ToOwned::to_owned);
                let end = after_marker + idx + 1;
                spans.push(PlaceholderSpan {
                    range: start..end,
                    keyword,
                });
                cursor = end;
            }
            None => cursor = after_marker,
        }
    }
    spans
}
