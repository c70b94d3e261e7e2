// ABOUTME: Command implementations for the supplement advisor CLI
// ABOUTME: File loading, progress output on stderr, and text or JSON rendering on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

use std::path::Path;

use anyhow::{Context as _, Result};
use serde_json::json;
use supplement_advisor::config::AdvisorConfig;
use supplement_advisor::llm::{prompts::build_report_prompt, ChatProvider};
use supplement_advisor::models::UserProfile;
use supplement_advisor::services::{ask_once, synthesize_fallback_report, ReportGenerator};
use supplement_advisor::structuring::parse_report_content;
use tokio::fs;
use tracing::info;

async fn load_profile(path: &Path) -> Result<UserProfile> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid profile JSON in {}", path.display()))
}

/// Generate a report and print it
pub async fn generate(profile_path: &Path, prompt_file: Option<&Path>, as_json: bool) -> Result<()> {
    let profile = load_profile(profile_path).await?;
    let prompt = match prompt_file {
        Some(path) => fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read prompt {}", path.display()))?,
        None => build_report_prompt(&profile),
    };

    let config = AdvisorConfig::from_env()?;
    let provider = ChatProvider::from_config(&config)?;
    let generator = ReportGenerator::new(&provider, config.retry_policy);

    let progress = |status: &str, attempt: Option<u32>| match attempt {
        Some(attempt) => eprintln!("[{attempt}] {status}"),
        None => eprintln!("{status}"),
    };
    let result = generator
        .generate_report(&prompt, &profile, Some(&progress))
        .await;
    info!(source = result.source.as_str(), "Report ready");

    if as_json {
        let parsed = parse_report_content(&result.content);
        let output = json!({
            "result": result,
            "parsed": parsed,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", result.content);
        if let Some(diagnostic) = &result.error {
            eprintln!("Fallback used: {diagnostic}");
        }
    }
    Ok(())
}

/// Parse a report file and print the structured records
pub async fn parse(input: &Path) -> Result<()> {
    let text = fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read report {}", input.display()))?;
    let parsed = parse_report_content(&text);
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

/// Print the offline fallback report
pub async fn fallback(profile_path: &Path) -> Result<()> {
    let profile = load_profile(profile_path).await?;
    println!("{}", synthesize_fallback_report(&profile));
    Ok(())
}

/// Ask one question through the configured provider
pub async fn chat(question: &str) -> Result<()> {
    let config = AdvisorConfig::from_env()?;
    let provider = ChatProvider::from_config(&config)?;
    let reply = ask_once(&provider, question).await?;
    println!("{reply}");
    Ok(())
}
