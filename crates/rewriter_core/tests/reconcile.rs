use pretty_assertions::assert_eq;
use rewriter_core::{count_placeholders, reconcile_placeholders, ImagePattern};

const ORIGINAL_2_1: &str = "첫 문단\n\n[이미지]\n\n[이미지]\n\n둘째 문단\n\n[이미지]\n\n끝";

fn rewritten_with_body(body: &str) -> String {
    format!("[제목]\n새 제목\n\n[본문]\n{body}\n\n[해시태그]\n#여행 #맛집")
}

#[test]
fn no_placeholders_in_original_leaves_text_untouched() {
    let rewritten = rewritten_with_body("가\n\n나");
    let outcome = reconcile_placeholders(&rewritten, "이미지 없는 원문");
    assert_eq!(outcome.text, rewritten);
    assert_eq!(outcome.expected, 0);
    assert!(!outcome.repaired);
}

#[test]
fn half_of_expected_is_accepted() {
    let original = "[이미지]\n\n[이미지]\n\n[이미지]\n\n[이미지]";
    let rewritten = rewritten_with_body("가\n\n[이미지]\n\n나\n\n[이미지]");
    let outcome = reconcile_placeholders(&rewritten, original);
    assert_eq!(outcome.expected, 4);
    assert_eq!(outcome.actual, 2);
    assert!(!outcome.repaired);
    assert_eq!(outcome.text, rewritten);
}

#[test]
fn missing_groups_are_spread_over_paragraphs() {
    let rewritten = rewritten_with_body("문단 하나\n\n문단 둘\n\n문단 셋\n\n문단 넷");
    let outcome = reconcile_placeholders(&rewritten, ORIGINAL_2_1);

    assert!(outcome.repaired);
    assert_eq!(outcome.expected, 3);
    assert_eq!(outcome.actual, 0);
    assert_eq!(
        outcome.text,
        "[제목]\n새 제목\n\n[본문]\n\
         문단 하나\n\n문단 둘\n\n[이미지]\n\n[이미지]\n\n문단 셋\n\n[이미지]\n\n문단 넷\
         \n\n[해시태그]\n#여행 #맛집"
    );
    let body = rewriter_core::parse_rewrite(&outcome.text).body;
    assert_eq!(ImagePattern::analyze(&body).runs(), &[2, 1]);
}

#[test]
fn repair_is_idempotent() {
    let rewritten = rewritten_with_body("문단 하나\n\n문단 둘\n\n문단 셋\n\n문단 넷");
    let once = reconcile_placeholders(&rewritten, ORIGINAL_2_1);
    let twice = reconcile_placeholders(&once.text, ORIGINAL_2_1);
    assert!(once.repaired);
    assert!(!twice.repaired);
    assert_eq!(twice.text, once.text);
}

#[test]
fn empty_body_receives_all_groups() {
    let rewritten = "[제목]\n제목\n\n[본문]\n\n[해시태그]\n#태그";
    let outcome = reconcile_placeholders(rewritten, ORIGINAL_2_1);
    assert_eq!(
        outcome.text,
        "[제목]\n제목\n\n[본문]\n[이미지]\n\n[이미지]\n\n[이미지]\n\n[해시태그]\n#태그"
    );
}

#[test]
fn unmarked_output_is_repaired_as_a_whole() {
    let original = "## Intro\n\nHello\n\n[이미지]\n\n[이미지]\n\nBye";
    let outcome = reconcile_placeholders("## 소개\n\n안녕하세요\n\n잘 가요", original);
    assert!(outcome.repaired);
    assert_eq!(
        outcome.text,
        "## 소개\n\n안녕하세요\n\n[이미지]\n\n[이미지]\n\n잘 가요"
    );
    assert_eq!(count_placeholders(&outcome.text), 2);
}

#[test]
fn single_paragraph_collects_every_group_after_it() {
    let rewritten = rewritten_with_body("유일한 문단");
    let outcome = reconcile_placeholders(&rewritten, ORIGINAL_2_1);
    let body = rewriter_core::parse_rewrite(&outcome.text).body;
    assert_eq!(body, "유일한 문단\n\n[이미지]\n\n[이미지]\n\n[이미지]");
}
