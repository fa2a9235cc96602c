use pretty_assertions::assert_eq;
use rewriter_core::{format_sections, parse_rewrite, RewriteResult};

#[test]
fn well_formed_response_round_trips() {
    let result = RewriteResult {
        title: "가을 제주 여행".to_string(),
        body: "## 첫날\n\n바다를 봤어요.\n\n[이미지]".to_string(),
        hashtags: "#제주 #여행".to_string(),
    };
    assert_eq!(parse_rewrite(&format_sections(&result)), result);
}

#[test]
fn sections_follow_order_of_appearance() {
    let raw = "[해시태그]\n#a\n[본문]\n본문 내용\n[제목]\n제목";
    let parsed = parse_rewrite(raw);
    assert_eq!(parsed.hashtags, "#a");
    assert_eq!(parsed.body, "본문 내용");
    assert_eq!(parsed.title, "제목");
}

#[test]
fn missing_title_and_hashtags_are_empty() {
    let parsed = parse_rewrite("서론\n[본문]\n내용만 있음");
    assert_eq!(parsed.title, "");
    assert_eq!(parsed.body, "내용만 있음");
    assert_eq!(parsed.hashtags, "");
}

#[test]
fn untagged_output_becomes_body() {
    let raw = "  [제목]\n제목만 있고 본문 표시는 없음\n";
    let parsed = parse_rewrite(raw);
    assert_eq!(
        parsed,
        RewriteResult {
            title: String::new(),
            body: raw.trim().to_string(),
            hashtags: String::new(),
        }
    );
}
