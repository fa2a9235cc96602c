use std::sync::LazyLock;

use regex::Regex;

use crate::placeholder::LINK_MARKER;

/// "글: ...", "사진 ⓒ...", "Photo: ..." credit lines.
#[allow(clippy::expect_used)]
static CREDIT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(글/사진|글|사진|photo|credit)\s*[©ⓒ:]").expect("valid regex")
});

#[allow(clippy::expect_used)]
static HANDLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@\w+$").expect("valid regex"));

#[allow(clippy::expect_used)]
static SOCIAL_LINK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(instagram|insta|youtube|twitter|tiktok)\.com/").expect("valid regex")
});

/// Bare ids such as `luo_603` left over from profile blocks.
#[allow(clippy::expect_used)]
static BARE_ID_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_.]{2,20}$").expect("valid regex"));

fn is_attribution_line(line: &str) -> bool {
    let line = line.trim();
    if line.starts_with('#') && !line.starts_with("##") {
        return true;
    }
    if line.starts_with(LINK_MARKER) {
        return true;
    }
    CREDIT_LINE.is_match(line)
        || HANDLE_LINE.is_match(line)
        || SOCIAL_LINK_LINE.is_match(line)
        || (BARE_ID_LINE.is_match(line) && !line.chars().all(|c| c.is_ascii_digit()))
}

/// Drops authorship, hashtag, credit and handle lines, keeping every other
/// line untouched and in order.
///
/// This is a heuristic: short latin-only lines are treated as handles.
pub fn scrub_attribution(text: &str) -> String {
    text.split('\n')
        .filter(|line| !is_attribution_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}
