// ABOUTME: Tests for the single-shot chat service
// ABOUTME: One call per question, no retry, provider errors surface as AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::ScriptedProvider;
use supplement_advisor::errors::{CompletionError, ErrorCode};
use supplement_advisor::llm::ChatResponse;
use supplement_advisor::services::ask_once;

#[tokio::test]
async fn test_ask_once_returns_reply() {
    let provider = ScriptedProvider::new(vec![Ok(ChatResponse::text("Sí, con moderación."))]);

    let reply = ask_once(&provider, "  ¿Puedo tomar creatina y cafeína juntas?  ")
        .await
        .unwrap();

    assert_eq!(reply, "Sí, con moderación.");
    assert_eq!(
        provider.prompts(),
        vec!["¿Puedo tomar creatina y cafeína juntas?".to_owned()]
    );
}

#[tokio::test]
async fn test_blank_question_is_rejected_without_calling() {
    let provider = ScriptedProvider::always_failing();

    let err = ask_once(&provider, "   ").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_failure_is_not_retried() {
    let provider = ScriptedProvider::new(vec![Err(CompletionError::HttpStatus {
        status: 500,
        body: "boom".to_owned(),
    })]);

    let err = ask_once(&provider, "hola").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.to_string().contains("HTTP 500"));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_transport_failure_maps_to_unavailable() {
    let provider = ScriptedProvider::always_failing();

    let err = ask_once(&provider, "hola").await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}
