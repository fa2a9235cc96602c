pub const TITLE_MARKER: &str = "[제목]";
pub const BODY_MARKER: &str = "[본문]";
pub const HASHTAG_MARKER: &str = "[해시태그]";

/// Sections of a completion response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RewriteResult {
    pub title: String,
    pub body: String,
    pub hashtags: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Body,
    Hashtags,
}

impl Section {
    const ALL: [Section; 3] = [Section::Title, Section::Body, Section::Hashtags];

    fn marker(self) -> &'static str {
        match self {
            Section::Title => TITLE_MARKER,
            Section::Body => BODY_MARKER,
            Section::Hashtags => HASHTAG_MARKER,
        }
    }
}

/// Splits a tagged completion response into title, body and hashtags.
///
/// Each marker's first occurrence opens a section that runs to the next marker
/// in order of appearance. If no body is captured, the whole response becomes
/// the body and the other fields stay empty.
pub fn parse_rewrite(raw: &str) -> RewriteResult {
    let mut found: Vec<(usize, Section)> = Section::ALL
        .iter()
        .filter_map(|&section| raw.find(section.marker()).map(|pos| (pos, section)))
        .collect();
    found.sort_by_key(|(pos, _)| *pos);

    let mut result = RewriteResult::default();
    for (idx, &(pos, section)) in found.iter().enumerate() {
        let start = pos + section.marker().len();
        let end = found.get(idx + 1).map_or(raw.len(), |(next, _)| *next);
        let value = raw[start..end].trim();
        let slot = match section {
            Section::Title => &mut result.title,
            Section::Body => &mut result.body,
            Section::Hashtags => &mut result.hashtags,
        };
        *slot = value.to_string();
    }

    if result.body.is_empty() {
        return RewriteResult {
            body: raw.trim().to_string(),
            ..RewriteResult::default()
        };
    }
    result
}

/// Renders a result back into the tagged three-section form.
pub fn format_sections(result: &RewriteResult) -> String {
    format!(
        "{TITLE_MARKER}\n{}\n\n{BODY_MARKER}\n{}\n\n{HASHTAG_MARKER}\n{}\n",
        result.title, result.body, result.hashtags
    )
}
