// ABOUTME: HTTP-level tests for the completion providers against a wiremock server
// ABOUTME: Verifies request shape, error mapping, and retry/fallback over real HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::time::Duration;

use common::{long_reply, sample_profile};
use serde_json::json;
use supplement_advisor::config::OpenAiSettings;
use supplement_advisor::errors::CompletionError;
use supplement_advisor::llm::{
    ChatMessage, ChatRequest, CompletionEndpointProvider, LlmProvider, MessageRole,
    OpenAiCompatibleProvider,
};
use supplement_advisor::models::{ReportSource, RetryPolicy};
use supplement_advisor::services::ReportGenerator;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn endpoint_for(server: &MockServer) -> CompletionEndpointProvider {
    CompletionEndpointProvider::with_timeout(
        format!("{}/chat", server.uri()),
        Duration::from_secs(5),
    )
    .unwrap()
}

// =============================================================================
// Hosted completion endpoint
// =============================================================================

#[tokio::test]
async fn test_endpoint_returns_reply_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({ "message": "¿Qué tomo?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "Creatina" })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = endpoint_for(&server);
    let response = provider
        .complete(&ChatRequest::from_user_message("¿Qué tomo?"))
        .await
        .unwrap();

    assert_eq!(response.content, "Creatina");
    assert_eq!(provider.name(), "endpoint");
}

#[tokio::test]
async fn test_endpoint_maps_server_error_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = endpoint_for(&server)
        .complete(&ChatRequest::from_user_message("hola"))
        .await
        .unwrap_err();

    match err {
        CompletionError::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_endpoint_maps_invalid_json_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = endpoint_for(&server)
        .complete(&ChatRequest::from_user_message("hola"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn test_endpoint_maps_missing_reply_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "x" })))
        .mount(&server)
        .await;

    let err = endpoint_for(&server)
        .complete(&ChatRequest::from_user_message("hola"))
        .await
        .unwrap_err();

    assert!(matches!(err, CompletionError::Decode { .. }), "{err:?}");
}

#[tokio::test]
async fn test_endpoint_unreachable_maps_to_transport() {
    let provider =
        CompletionEndpointProvider::with_timeout("http://127.0.0.1:1/chat", Duration::from_secs(2))
            .unwrap();

    let err = provider
        .complete(&ChatRequest::from_user_message("hola"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "transport");
}

// =============================================================================
// Retry and fallback over HTTP
// =============================================================================

#[tokio::test]
async fn test_generation_recovers_after_transient_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": long_reply() })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = endpoint_for(&server);
    let profile = sample_profile();
    let result = ReportGenerator::new(&provider, RetryPolicy::default().without_delays())
        .generate_report("prompt", &profile, None)
        .await;

    assert_eq!(result.source, ReportSource::Ai);
    assert_eq!(result.content, long_reply());
}

#[tokio::test]
async fn test_generation_falls_back_when_endpoint_keeps_failing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(3)
        .mount(&server)
        .await;

    let provider = endpoint_for(&server);
    let profile = sample_profile();
    let result = ReportGenerator::new(&provider, RetryPolicy::default().without_delays())
        .generate_report("prompt", &profile, None)
        .await;

    assert!(result.success);
    assert_eq!(result.source, ReportSource::Fallback);
    let diagnostic = result.error.unwrap();
    assert!(diagnostic.contains("HTTP 503"), "{diagnostic}");
}

// =============================================================================
// OpenAI-compatible backend
// =============================================================================

fn openai_for(server: &MockServer, api_key: Option<&str>) -> OpenAiCompatibleProvider {
    let settings = OpenAiSettings {
        base_url: format!("{}/v1", server.uri()),
        api_key: api_key.map(str::to_owned),
        model: "test-model".to_owned(),
    };
    OpenAiCompatibleProvider::new(settings, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_openai_sends_bearer_and_maps_usage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "stream": false,
            "messages": [
                { "role": "system", "content": "Responde en español." },
                { "role": "user", "content": "¿Cuándo tomo magnesio?" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "test-model",
            "choices": [{
                "message": { "role": "assistant", "content": "Magnesio por la noche" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = openai_for(&server, Some("sk-test"));
    let request = ChatRequest::new(vec![
        ChatMessage::new(MessageRole::System, "Responde en español."),
        ChatMessage::user("¿Cuándo tomo magnesio?"),
    ]);
    let response = provider.complete(&request).await.unwrap();

    assert_eq!(response.content, "Magnesio por la noche");
    assert_eq!(response.model.as_deref(), Some("test-model"));
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    let usage = response.usage.unwrap();
    assert_eq!(usage.total_tokens, 17);
    assert_eq!(provider.default_model(), "test-model");
}

#[tokio::test]
async fn test_openai_without_choices_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = openai_for(&server, None)
        .complete(&ChatRequest::from_user_message("hola"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn test_openai_rate_limit_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let err = openai_for(&server, None)
        .complete(&ChatRequest::from_user_message("hola"))
        .await
        .unwrap_err();

    assert!(matches!(err, CompletionError::HttpStatus { status: 429, .. }));
}
