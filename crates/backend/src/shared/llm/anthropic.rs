//! Anthropic Messages API provider

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::types::{ChatMessage, ChatRole, LlmError, LlmProvider, LlmResponse};
use crate::system::config::AppConfig;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;
const TEMPERATURE: f32 = 0.7;

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub struct AnthropicProvider {
    api_key: String,
    model: String,
}

impl AnthropicProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self { api_key, model }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.anthropic_api_key.clone(),
            config.anthropic_model.clone(),
        )
    }

    /// Split role-tagged messages into the system string and the turn list
    /// the Messages API expects.
    fn build_request(&self, messages: Vec<ChatMessage>) -> MessagesRequest {
        let mut system = Vec::new();
        let mut turns = Vec::new();
        for message in messages {
            match message.role {
                ChatRole::System => system.push(message.content),
                _ => turns.push(message),
            }
        }

        MessagesRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            system: if system.is_empty() {
                None
            } else {
                Some(system.join("\n"))
            },
            messages: turns,
        }
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    model: String,
    #[serde(default)]
    stop_reason: Option<String>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    output_tokens: Option<i32>,
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
        let request = self.build_request(messages);

        let response = CLIENT
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        match response.status().as_u16() {
            200 => {}
            401 | 403 => {
                return Err(LlmError::AuthError(format!("HTTP {}", response.status())))
            }
            429 => return Err(LlmError::RateLimitExceeded),
            status => {
                let body = response.text().await.unwrap_or_default();
                return Err(LlmError::ApiError(format!("HTTP {status}: {body}")));
            }
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ApiError(format!("malformed response: {e}")))?;
        extract_response(body)
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }
}

fn extract_response(body: MessagesResponse) -> Result<LlmResponse, LlmError> {
    let content = body
        .content
        .iter()
        .filter(|block| block.kind == "text")
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join("");

    if content.is_empty() {
        return Err(LlmError::ApiError(
            "response contained no text content".to_owned(),
        ));
    }

    Ok(LlmResponse {
        content,
        tokens_used: body.usage.and_then(|u| u.output_tokens),
        model: body.model,
        finish_reason: body.stop_reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_messages_are_lifted_out_of_the_turn_list() {
        let provider = AnthropicProvider::new("key".into(), "model".into());
        let request = provider.build_request(vec![
            ChatMessage::system("be helpful"),
            ChatMessage::user("summarize this"),
        ]);

        assert_eq!(request.system.as_deref(), Some("be helpful"));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, ChatRole::User);
    }

    #[test]
    fn request_serializes_to_the_messages_wire_format() {
        let provider = AnthropicProvider::new("key".into(), "claude-3-5-sonnet-20241022".into());
        let request = provider.build_request(vec![ChatMessage::user("hi")]);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "claude-3-5-sonnet-20241022");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
        assert!(json.get("system").is_none());
    }

    #[test]
    fn response_text_blocks_are_joined() {
        let body: MessagesResponse = serde_json::from_str(
            r##"{
                "model": "claude-3-5-sonnet-20241022",
                "content": [
                    {"type": "text", "text": "# Hello"},
                    {"type": "text", "text": "\nWorld"}
                ],
                "stop_reason": "end_turn",
                "usage": {"output_tokens": 42}
            }"##,
        )
        .unwrap();

        let response = extract_response(body).unwrap();
        assert_eq!(response.content, "# Hello\nWorld");
        assert_eq!(response.tokens_used, Some(42));
        assert_eq!(response.finish_reason.as_deref(), Some("end_turn"));
    }

    #[test]
    fn empty_content_is_an_api_error() {
        let body: MessagesResponse =
            serde_json::from_str(r#"{"model": "m", "content": []}"#).unwrap();
        assert!(matches!(
            extract_response(body),
            Err(LlmError::ApiError(_))
        ));
    }
}
