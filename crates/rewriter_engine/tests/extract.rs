use pretty_assertions::assert_eq;
use rewriter_engine::{
    extract_generic_document, extract_platform_document, ExtractError, FALLBACK_TITLE,
};

const POST_URL: &str = "https://m.blog.naver.com/foodie/223000000001";

fn platform_page(modules: &str) -> String {
    format!(
        r#"<html><head><meta property="og:title" content="OG 제목"></head><body>
<div class="se-module se-module-text se-title-text"><p><span>부산 여행</span> <span>1일차</span></p></div>
<div class="se-main-container">{modules}</div>
</body></html>"#
    )
}

#[test]
fn platform_modules_become_structured_text() {
    let html = platform_page(
        r#"
<div class="se-component"><div class="se-module se-module-text"><p><b>해운대</b></p></div></div>
<div class="se-module se-module-text"><p>바다가 정말 예뻤어요.</p><p>사람도 많았고요.</p></div>
<div class="se-module se-module-image"><img src="https://blogthumb/low.jpg" data-lazy-src="https://postfiles/a.jpg"><div class="se-caption"><p>해운대 해변</p></div></div>
<div class="se-module se-module-image"><img src="https://postfiles/b.jpg"></div>
<div class="se-module se-module-image"></div>
<div class="se-module se-module-horizontalLine"><hr></div>
<div class="se-module se-module-text"><p>글/사진 ⓒ 맛토</p><p>luo_603</p><p>#부산 #여행</p><p>다음에 또 올게요.</p></div>
<div class="se-module se-module-oglink"><a href="https://x">관련 글 보기</a></div>
<div class="se-module se-module-sticker"><img src="https://sticker/1.png"></div>
"#,
    );

    let doc = extract_platform_document(&html, POST_URL).unwrap();
    assert_eq!(doc.title, "부산 여행1일차");
    assert_eq!(
        doc.content,
        "## 해운대\n\n바다가 정말 예뻤어요.\n사람도 많았고요.\n\n[이미지: 해운대 해변]\n\n[이미지]\n\n[이미지]\n\n---\n\n다음에 또 올게요.\n"
    );
    assert_eq!(
        doc.image_urls,
        vec![
            "https://postfiles/a.jpg".to_string(),
            "https://postfiles/b.jpg".to_string()
        ]
    );
    assert_eq!(doc.source_url, POST_URL);
}

#[test]
fn platform_title_falls_back_to_og_then_default() {
    let body = r#"<div class="se-main-container"><div class="se-module se-module-text"><p>본문</p></div></div>"#;
    let with_og = format!(
        r#"<html><head><meta property="og:title" content="OG 제목"></head><body>{body}</body></html>"#
    );
    assert_eq!(
        extract_platform_document(&with_og, POST_URL).unwrap().title,
        "OG 제목"
    );

    let bare = format!("<html><body>{body}</body></html>");
    assert_eq!(
        extract_platform_document(&bare, POST_URL).unwrap().title,
        FALLBACK_TITLE
    );
}

#[test]
fn legacy_platform_layout_is_plain_text() {
    let html = r#"<html><body><div class="tit_h3">옛날 글</div>
<div id="postViewArea"><p>첫 문단</p><p>#태그 줄</p><br><span>둘째</span></div></body></html>"#;
    let doc = extract_platform_document(html, POST_URL).unwrap();
    assert_eq!(doc.title, "옛날 글");
    assert_eq!(doc.content, "첫 문단\n#태그 줄\n둘째");
    assert!(doc.image_urls.is_empty());
}

#[test]
fn platform_post_without_content_is_an_error() {
    let only_noise = platform_page(
        r#"<div class="se-module se-module-text"><p>@someone</p><p>instagram.com/someone</p></div>"#,
    );
    assert_eq!(
        extract_platform_document(&only_noise, POST_URL),
        Err(ExtractError::EmptyPost)
    );
    assert_eq!(
        extract_platform_document("<html><body><p>private</p></body></html>", POST_URL),
        Err(ExtractError::EmptyPost)
    );
}

#[test]
fn generic_page_prefers_article_and_marks_images() {
    let html = r#"<html><head><title> 문서 제목 </title></head><body>
<nav>메뉴</nav>
<article>
  <header>머리글</header>
  <h1>큰 제목</h1>
  <p>첫 문단 <a href="/x">링크</a></p>
  <img data-src="/img/one.png" src="placeholder.gif">
  <img src="data:image/png;base64,AAAA">
  <img src="">
  <script>track()</script>
  <aside>광고</aside>
  <p>끝 문단</p>
  <img src="https://cdn.example.com/two.jpg">
</article>
<footer>저작권</footer>
</body></html>"#;

    let url = "https://example.com/posts/1";
    let doc = extract_generic_document(html, url, url).unwrap();
    assert_eq!(doc.title, "문서 제목");
    assert_eq!(
        doc.content,
        "큰 제목\n첫 문단\n링크\n[이미지]\n끝 문단\n[이미지]"
    );
    assert_eq!(
        doc.image_urls,
        vec![
            "https://example.com/img/one.png".to_string(),
            "https://cdn.example.com/two.jpg".to_string()
        ]
    );
}

#[test]
fn generic_page_uses_og_title_and_main_role() {
    let html = r#"<html><head><meta property="og:title" content="공유 제목"><title>탭 제목</title></head>
<body><div>사이드</div><div role="main"><p>메인 본문</p></div></body></html>"#;
    let url = "https://example.com/";
    let doc = extract_generic_document(html, url, url).unwrap();
    assert_eq!(doc.title, "공유 제목");
    assert_eq!(doc.content, "메인 본문");
}

#[test]
fn generic_page_without_text_is_an_error() {
    let html = "<html><head></head><body><nav>메뉴</nav><script>x()</script></body></html>";
    assert_eq!(
        extract_generic_document(html, "https://example.com/", "https://example.com/"),
        Err(ExtractError::EmptyPage)
    );
}

#[test]
fn relative_images_resolve_against_the_serving_address() {
    let html = r#"<html><body><article><p>이사 간 글</p><img src="pic.png"></article></body></html>"#;
    let doc = extract_generic_document(
        html,
        "https://example.com/old",
        "https://example.com/new/dir/page",
    )
    .unwrap();
    assert_eq!(doc.source_url, "https://example.com/old");
    assert_eq!(doc.image_urls, vec!["https://example.com/new/dir/pic.png".to_string()]);
}
