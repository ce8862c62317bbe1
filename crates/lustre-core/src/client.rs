//! AssistantClient trait definition.
//!
//! This is the session's only view of the remote chat endpoint: send the
//! full transcript, get one assistant reply back. Uses RPITIT (native
//! async fn in traits, Rust 2024 edition). Implementations live in
//! lustre-infra.

use lustre_types::chat::ChatMessage;
use lustre_types::error::ClientError;

/// Client for the remote routine assistant.
///
/// The transcript is sent whole on every call; the endpoint is stateless.
/// Every failure class (connection, non-2xx status, malformed body,
/// missing reply field) surfaces as a [`ClientError`] -- the session
/// collapses them all into a single unavailability signal.
pub trait AssistantClient: Send + Sync {
    /// Human-readable client name for logging (e.g., "worker").
    fn name(&self) -> &str;

    /// Send the transcript and receive the assistant's reply content.
    fn send(
        &self,
        transcript: &[ChatMessage],
    ) -> impl std::future::Future<Output = Result<String, ClientError>> + Send;
}
