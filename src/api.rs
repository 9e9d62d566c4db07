//! Client for an OpenAI-compatible chat-completion endpoint.
//!
//! One POST per chat turn, no retry or backoff. Every failure surfaces as an
//! [`ApiError`] that the interactive loop reports inline and survives.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;

/// Fixed output-token bound sent with every request.
pub const MAX_TOKENS: u32 = 1000;
/// Fixed sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.8;

/// Give a hung endpoint a bounded window instead of wedging the loop.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("response contained no message content")]
    MalformedResponse,
}

/// One role/content pair on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Request body for `POST {base}/chat/completions`.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f64,
}

/// Success body; fields the extractor doesn't need are ignored, and missing
/// ones deserialize to defaults so shape problems map to
/// [`ApiError::MalformedResponse`] rather than a decode error.
#[derive(Debug, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: ResponseMessage,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Client bound to one endpoint, credential, and model for the process
/// lifetime.
pub struct ChatClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl ChatClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// Send one completion request and return the first choice's content.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ApiError> {
        let url = format!("{}/chat/completions", self.api_base);
        let body = ChatRequest {
            model: &self.model,
            messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Http { status, body });
        }

        let parsed: ChatResponse = resp.json().await?;
        extract_reply(parsed)
    }
}

/// Pull the reply text out of a decoded response body.
fn extract_reply(response: ChatResponse) -> Result<String, ApiError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(ApiError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_choice_content() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Ship it."}},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
            ],
            "usage": {"total_tokens": 12}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(extract_reply(parsed).unwrap(), "Ship it.");
    }

    #[test]
    fn empty_choices_is_malformed() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            extract_reply(parsed),
            Err(ApiError::MalformedResponse)
        ));
    }

    #[test]
    fn missing_content_is_malformed() {
        let parsed: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"role": "assistant"}}]}"#).unwrap();
        assert!(matches!(
            extract_reply(parsed),
            Err(ApiError::MalformedResponse)
        ));
    }

    #[test]
    fn unexpected_top_level_shape_is_malformed() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert!(matches!(
            extract_reply(parsed),
            Err(ApiError::MalformedResponse)
        ));
    }

    #[test]
    fn request_body_serializes_the_wire_contract() {
        let messages = vec![ChatMessage::system("persona"), ChatMessage::user("hi")];
        let body = ChatRequest {
            model: "gpt-4",
            messages: &messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["temperature"], 0.8);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
    }
}
