use pretty_assertions::assert_eq;
use rewriter_core::{
    image_links, number_placeholders, record_submission, HistoryEntry, RewriteReport,
    RewriteResult, RewriteStats, HISTORY_LIMIT,
};

#[test]
fn links_pair_placeholders_with_source_urls_by_position() {
    let body = "가\n\n[이미지]\n\n[이미지: 노을]\n\n[이미지]";
    let sources = vec!["https://img/1.jpg".to_string(), "https://img/2.jpg".to_string()];
    let links = image_links(body, &sources);

    assert_eq!(links.len(), 3);
    assert_eq!(links[0].number, 1);
    assert_eq!(links[0].source_url.as_deref(), Some("https://img/1.jpg"));
    assert_eq!(links[1].keyword.as_deref(), Some("노을"));
    assert_eq!(links[2].source_url, None);
}

#[test]
fn placeholders_are_numbered_in_order() {
    assert_eq!(
        number_placeholders("[이미지]\n본문\n[이미지: 커피]"),
        "[이미지 1]\n본문\n[이미지 2: 커피]"
    );
}

#[test]
fn stats_track_placeholders_and_urls_separately() {
    let stats = RewriteStats::compute("[이미지]\n\n[이미지]\n본문", "다른 글", 1);
    assert_eq!(stats.image_count, 2);
    assert_eq!(stats.source_image_count, 1);
    assert_eq!(stats.original_len, 15);
    assert_eq!(stats.rewritten_len, 4);
}

#[test]
fn copy_ready_text_falls_back_to_original_title() {
    let report = RewriteReport {
        url: "https://blog.naver.com/a/1".to_string(),
        fetched_url: "https://m.blog.naver.com/a/1".to_string(),
        original_title: "원래 제목".to_string(),
        original_content: "[이미지]\n본문".to_string(),
        result: RewriteResult {
            title: String::new(),
            body: "[이미지]\n새 본문".to_string(),
            hashtags: "#태그".to_string(),
        },
        stats: RewriteStats::compute("[이미지]\n본문", "[이미지]\n새 본문", 1),
        image_links: Vec::new(),
        source_image_urls: vec!["https://img/1.jpg".to_string()],
        repaired: false,
    };
    assert_eq!(report.copy_ready_text(), "원래 제목\n\n[이미지 1]\n새 본문\n\n#태그");
}

#[test]
fn history_is_most_recent_first_and_capped() {
    let mut history: Vec<HistoryEntry> = Vec::new();
    for n in 0..(HISTORY_LIMIT + 5) {
        record_submission(&mut history, vec![format!("https://a/{n}")], format!("t{n}"));
    }
    record_submission(&mut history, Vec::new(), "ignored".to_string());

    assert_eq!(history.len(), HISTORY_LIMIT);
    assert_eq!(history[0].timestamp, format!("t{}", HISTORY_LIMIT + 4));
    assert_eq!(history[HISTORY_LIMIT - 1].timestamp, "t5");
}
