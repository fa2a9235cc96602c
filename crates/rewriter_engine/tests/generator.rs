use std::time::Duration;

use rewriter_engine::{CompletionSettings, GenerateError, OpenAiGenerator, TextGenerator};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> CompletionSettings {
    CompletionSettings {
        base_url: format!("{}/v1/", server.uri()),
        api_key: "sk-test".to_string(),
        timeout: Duration::from_secs(5),
        ..CompletionSettings::default()
    }
}

#[tokio::test]
async fn posts_chat_request_and_returns_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "max_tokens": 4096,
            "messages": [
                { "role": "system", "content": "규칙" },
                { "role": "user", "content": "원문" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "[제목]\n새 제목" } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator = OpenAiGenerator::new(settings(&server)).unwrap();
    let text = generator.generate("규칙", "원문").await.unwrap();
    assert_eq!(text, "[제목]\n새 제목");
}

#[tokio::test]
async fn http_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let generator = OpenAiGenerator::new(settings(&server)).unwrap();
    let err = generator.generate("s", "u").await.unwrap_err();
    assert_eq!(
        err,
        GenerateError::HttpStatus {
            status: 429,
            body: "rate limited".to_string()
        }
    );
}

#[tokio::test]
async fn empty_completion_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [ { "message": { "content": "  " } } ]
        })))
        .mount(&server)
        .await;

    let generator = OpenAiGenerator::new(settings(&server)).unwrap();
    assert_eq!(
        generator.generate("s", "u").await.unwrap_err(),
        GenerateError::EmptyCompletion
    );
}

#[tokio::test]
async fn missing_key_fails_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let generator = OpenAiGenerator::new(CompletionSettings {
        api_key: String::new(),
        ..settings(&server)
    })
    .unwrap();
    assert_eq!(
        generator.generate("s", "u").await.unwrap_err(),
        GenerateError::MissingApiKey
    );
}
