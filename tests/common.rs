// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Sample profiles, a scripted in-memory LLM provider, and a progress recorder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

#![allow(dead_code, missing_docs)]
#![allow(clippy::must_use_candidate, clippy::missing_panics_doc)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use supplement_advisor::errors::CompletionError;
use supplement_advisor::llm::{ChatRequest, ChatResponse, LlmProvider};
use supplement_advisor::models::{ExperienceLevel, Gender, TrainingFrequency, UserProfile};

/// Profile used across tests
pub fn sample_profile() -> UserProfile {
    UserProfile {
        age: 34,
        gender: Gender::Male,
        weight_kg: 78.0,
        height_cm: 180.0,
        objective: "ganar masa muscular".to_owned(),
        sport: "crossfit".to_owned(),
        experience: ExperienceLevel::Intermediate,
        training_frequency: TrainingFrequency::High,
        medical_conditions: vec![],
        allergies: vec![],
        current_supplements: vec![],
    }
}

/// A reply long enough to pass the default content threshold
pub fn long_reply() -> String {
    format!(
        "## Creatina\n- **Dosis recomendada:** 5g\n- **Momento de toma:** Después del entrenamiento\n{}",
        "Texto de relleno para superar el mínimo de caracteres. ".repeat(4)
    )
}

/// Provider returning scripted outcomes in order, then transport errors
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Result<ChatResponse, CompletionError>>>,
    calls: AtomicU32,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Result<ChatResponse, CompletionError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicU32::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Provider that fails every call
    pub fn always_failing() -> Self {
        Self::new(vec![])
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted test provider"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let prompt = request.last_user_message().unwrap_or_default().to_owned();
        self.prompts.lock().unwrap().push(prompt);
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(CompletionError::transport("connection refused")))
    }
}

/// Records progress events
#[derive(Clone, Default)]
pub struct ProgressLog {
    events: Arc<Mutex<Vec<(String, Option<u32>)>>>,
}

impl ProgressLog {
    pub fn reporter(&self) -> impl Fn(&str, Option<u32>) + Send + Sync {
        let events = Arc::clone(&self.events);
        move |status: &str, attempt: Option<u32>| {
            events.lock().unwrap().push((status.to_owned(), attempt));
        }
    }

    pub fn events(&self) -> Vec<(String, Option<u32>)> {
        self.events.lock().unwrap().clone()
    }
}
