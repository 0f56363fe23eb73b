//! HTTP transport for the assistant service

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::wire::{ChatRequest, ChatResponse};
use super::{ChatTransport, TransportError};

/// Longest slice of a response body quoted in error messages.
const BODY_SNIPPET_LEN: usize = 200;

/// Real network transport talking to the trip-planning backend
pub struct HttpTransport {
    client: Client,
    base_url: String,
    chat_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let chat_url = format!("{base_url}/chat");

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            chat_url,
        }
    }

    /// Probe the service root. Returns false instead of erroring so callers
    /// can degrade to a warning at startup.
    pub async fn health_check(&self) -> bool {
        match self.client.get(format!("{}/", self.base_url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, message: &str) -> Result<ChatResponse, TransportError> {
        let request = ChatRequest {
            message: message.to_string(),
        };

        let response = self
            .client
            .post(&self.chat_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::timeout(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    TransportError::network(format!("Connection failed: {e}"))
                } else {
                    TransportError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(classify_status(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            TransportError::malformed(format!(
                "Failed to parse response: {e} - body: {}",
                body_snippet(&body)
            ))
        })
    }

    fn describe(&self) -> &str {
        &self.base_url
    }
}

fn classify_status(status: reqwest::StatusCode, body: &str) -> TransportError {
    let snippet = body_snippet(body);
    let message = match status.as_u16() {
        400 => format!("Invalid request: {snippet}"),
        401 | 403 => format!("Authentication failed: {snippet}"),
        429 => format!("Rate limited: {snippet}"),
        500..=599 => format!("Server error ({status}): {snippet}"),
        _ => format!("HTTP {status}: {snippet}"),
    };
    TransportError::status(message)
}

fn body_snippet(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }
    if trimmed.chars().count() <= BODY_SNIPPET_LEN {
        return trimmed.to_string();
    }
    let mut snippet: String = trimmed.chars().take(BODY_SNIPPET_LEN).collect();
    snippet.push_str("...");
    snippet
}
