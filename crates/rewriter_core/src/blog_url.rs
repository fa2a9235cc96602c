use url::Url;

const DESKTOP_HOST: &str = "blog.naver.com";
const MOBILE_HOST: &str = "m.blog.naver.com";
const LEGACY_VIEW_MARKER: &str = "PostView";

/// Example shown to the user when a URL is not recognized.
pub const EXPECTED_URL_EXAMPLE: &str = "https://blog.naver.com/blogid/123456789";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("올바른 네이버 블로그 URL을 입력해주세요.\n예: {example}")]
    InvalidUrl { url: String, example: &'static str },
}

/// Whether `raw` points at the blog platform (and should use the platform
/// extractor) rather than an arbitrary page.
pub fn is_platform_url(raw: &str) -> bool {
    Url::parse(raw.trim())
        .ok()
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|host| host.contains(DESKTOP_HOST))
}

/// Canonical mobile URL of a blog post: `https://m.blog.naver.com/<blogId>/<postNo>`.
///
/// Accepts the desktop or mobile `/<blogId>/<postNo>` form and the legacy
/// `PostView` form carrying `blogId` and `logNo` query parameters.
pub fn normalize_blog_url(raw: &str) -> Result<String, UrlError> {
    let trimmed = raw.trim();
    let invalid = || UrlError::InvalidUrl {
        url: trimmed.to_string(),
        example: EXPECTED_URL_EXAMPLE,
    };
    let parsed = Url::parse(trimmed).map_err(|_| invalid())?;
    let host = parsed.host_str().unwrap_or_default().to_ascii_lowercase();

    if host == DESKTOP_HOST || host == MOBILE_HOST {
        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();
        if let [blog_id, post_no, ..] = segments.as_slice() {
            return Ok(canonical(blog_id, post_no));
        }
    }

    if parsed.path().contains(LEGACY_VIEW_MARKER) || trimmed.contains(LEGACY_VIEW_MARKER) {
        let query_value = |key: &str| {
            parsed
                .query_pairs()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
                .filter(|v| !v.is_empty())
        };
        if let (Some(blog_id), Some(post_no)) = (query_value("blogId"), query_value("logNo")) {
            return Ok(canonical(&blog_id, &post_no));
        }
    }

    Err(invalid())
}

fn canonical(blog_id: &str, post_no: &str) -> String {
    format!("https://{MOBILE_HOST}/{blog_id}/{post_no}")
}
