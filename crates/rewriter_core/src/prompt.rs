use crate::pattern::ImagePattern;

/// Fixed instruction template sent as the system prompt.
pub const SYSTEM_PROMPT: &str = "\
당신은 블로그 글 재작성 전문가입니다. 아래 규칙을 반드시 따르세요.

1. 원문의 소제목 구조(##)를 그대로 유지하세요.
2. 원문의 말투와 분위기(존댓말/반말, 이모티콘 사용 여부 등)를 동일하게 유지하세요.
3. 핵심 정보와 주제를 유지하되, 문장을 새롭게 재구성하세요.
4. 원문에 [이미지] 또는 [이미지: 키워드] 표시가 있으면 해당 위치에 그대로 표시하세요.
5. 작성자 이름, SNS 아이디, 사진 출처 등 저작권/작성자 표기는 모두 제거하세요.
6. 결과물은 마크다운 없이 순수 텍스트로 작성하되, 소제목만 ## 으로 표시하세요.
7. 원문 길이와 비슷하게 작성하세요.

[출력 형식]
반드시 아래 세 구역으로 나누어 출력하세요.

[제목]
새로운 제목 한 줄

[본문]
재작성한 본문

[해시태그]
#태그1 #태그2 #태그3
";

/// System prompt with the placeholder instruction for `pattern` appended.
pub fn build_system_prompt(pattern: &ImagePattern) -> String {
    let instruction = pattern.instruction();
    if instruction.is_empty() {
        return SYSTEM_PROMPT.to_string();
    }
    format!("{SYSTEM_PROMPT}\n{instruction}")
}

pub fn build_user_message(title: &str, content: &str) -> String {
    format!("# 원문 제목\n{title}\n\n# 원문 본문\n{content}")
}
