//! HTTP client for an Ollama-compatible chat service

use crate::config::LlmConfig;
use crate::error::{CareerwiseError, Result};
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

/// Chat client with bounded retries. Transport failures and 429/5xx replies
/// are retried with exponential backoff; other non-success statuses fail
/// immediately.
pub struct ChatClient {
    http: Client,
    base_url: String,
    model: String,
    max_retries: u32,
}

impl ChatClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_retries: config.max_retries.max(1),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a conversation and returns the assistant's reply text.
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        let mut last_error: Option<CareerwiseError> = None;

        for attempt in 0..self.max_retries {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Chat request attempt {} failed, retrying after {}ms",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.http.post(&url).json(&request).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(CareerwiseError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Chat service returned {}: {}", status, body);
                last_error = Some(CareerwiseError::Chat(format!(
                    "status {}: {}",
                    status, body
                )));
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(CareerwiseError::Chat(format!(
                    "status {}: {}",
                    status, body
                )));
            }

            let parsed: ChatResponse = response.json().await?;
            debug!("Chat reply received: {} bytes", parsed.message.content.len());
            return Ok(parsed.message.content);
        }

        Err(last_error
            .unwrap_or_else(|| CareerwiseError::Chat("chat service unreachable".to_string())))
    }

    /// Convenience wrapper for the common system + user exchange.
    pub async fn chat_system_user(&self, system: &str, user: &str) -> Result<String> {
        self.chat(&[ChatMessage::system(system), ChatMessage::user(user)])
            .await
    }
}
