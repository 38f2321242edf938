//! README generation pipeline
//!
//! Collect the repository's relevant sources, summarize them with the
//! configured model, return the markdown.

use thiserror::Error;

use super::prompt;
use crate::shared::github::{self, GithubError};
use crate::shared::llm::anthropic::AnthropicProvider;
use crate::shared::llm::types::{ChatMessage, LlmError, LlmProvider};
use crate::system::config;

/// Returned verbatim when a repository has nothing worth quoting.
const EMPTY_REPO_SUMMARY: &str = "No summarizable files found in repository.";

#[derive(Debug, Error)]
pub enum ReadmeError {
    #[error("Failed to fetch repository: {0}")]
    Github(#[from] GithubError),

    #[error("Failed to summarize repository: {0}")]
    Llm(#[from] LlmError),
}

pub async fn generate(profile: &str, repo: &str) -> Result<String, ReadmeError> {
    let files = github::fetch_repo_sources(profile, repo).await?;
    if files.is_empty() {
        return Ok(EMPTY_REPO_SUMMARY.to_owned());
    }
    tracing::debug!("quoting {} files from {}/{}", files.len(), profile, repo);

    let provider = AnthropicProvider::from_config(config::get());
    let messages = vec![
        ChatMessage::system(prompt::SYSTEM_PROMPT),
        ChatMessage::user(prompt::build_user_prompt(&files)),
    ];

    let response = provider.chat_completion(messages).await?;
    tracing::info!(
        "summarized {}/{} via {} {} ({:?} output tokens)",
        profile,
        repo,
        provider.provider_name(),
        response.model,
        response.tokens_used
    );
    Ok(response.content.trim().to_owned())
}
