//! HTTP client for the remote routine assistant.
//!
//! A single-endpoint POST client: the full transcript goes out with a
//! fixed model identifier, one assistant message comes back. The wire
//! envelopes are explicit serde structs private to this module -- anything
//! that fails to match them becomes a [`ClientError`] instead of letting
//! malformed data propagate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use lustre_core::client::AssistantClient;
use lustre_types::chat::ChatMessage;
use lustre_types::config::AppConfig;
use lustre_types::error::ClientError;

/// Request body for the chat completion endpoint.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: &'a [ChatMessage],
    model: &'a str,
}

/// Expected response shape. Only `choices[0]` is consulted.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// [`AssistantClient`] implementation talking to a chat-completion worker
/// endpoint over HTTPS.
pub struct WorkerAssistantClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl WorkerAssistantClient {
    /// Create a client for the given endpoint and model.
    pub fn new(endpoint: String, model: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            endpoint,
            model,
        }
    }

    /// Create a client from the application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// The model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Pull the reply text out of a parsed response.
    ///
    /// An empty content string counts as no reply, matching the reference
    /// behavior's truthiness check on `choices[0].message.content`.
    fn extract_reply(response: ChatResponse) -> Result<String, ClientError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(ClientError::MissingReply)
    }
}

impl AssistantClient for WorkerAssistantClient {
    fn name(&self) -> &str {
        "worker"
    }

    async fn send(&self, transcript: &[ChatMessage]) -> Result<String, ClientError> {
        let body = ChatRequest {
            messages: transcript,
            model: &self.model,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "chat endpoint returned error status");
            return Err(ClientError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Deserialization(e.to_string()))?;

        Self::extract_reply(parsed)
    }
}
