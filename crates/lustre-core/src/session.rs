//! Conversation session state machine.
//!
//! Owns the ordered transcript exchanged with the remote assistant and
//! defines the two legal transitions: a routine request, which hard-resets
//! the transcript to [system, selection], and a follow-up question, which
//! appends to it. The fixed system message at index 0 is never removed or
//! duplicated.

use tracing::{debug, warn};

use lustre_types::catalog::RoutineProduct;
use lustre_types::chat::ChatMessage;
use lustre_types::error::SessionError;

use crate::client::AssistantClient;

/// Fixed system instruction leading every transcript.
///
/// Pins the assistant to beauty topics (skincare, haircare, makeup,
/// fragrance), tells it to decline anything else politely, and asks for
/// links/citations when it uses real-time information.
pub const SYSTEM_PROMPT: &str = "You are a helpful skincare and beauty routine assistant. \
You have access to real-time web search. When answering, always include the most current \
information about the selected products or routines, and provide any relevant links or \
citations you find. Only answer questions about the generated routine, skincare, haircare, \
makeup, fragrance, or related beauty topics. If a question is off-topic, politely say you \
can only answer beauty-related questions.";

/// Framing line placed before the serialized selection in a routine request.
const ROUTINE_REQUEST_PREFIX: &str = "Here are the selected products as JSON:";

/// A conversation with the remote routine assistant.
///
/// The transcript is owned state, never ambient: callers hold the session
/// and pass it wherever it is needed. Both operations take `&mut self`, so
/// the borrow checker rules out a second call while one is awaiting the
/// client -- single-flight is a structural invariant here, not a
/// presentation-layer discipline.
pub struct ConversationSession {
    transcript: Vec<ChatMessage>,
}

impl ConversationSession {
    /// Create a session with the default system prompt.
    pub fn new() -> Self {
        Self::with_system_prompt(SYSTEM_PROMPT)
    }

    /// Create a session with a custom system prompt.
    pub fn with_system_prompt(prompt: impl Into<String>) -> Self {
        Self {
            transcript: vec![ChatMessage::system(prompt)],
        }
    }

    /// The full transcript in causal order. Element 0 is always the system
    /// message.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Request a fresh routine for the selected products.
    ///
    /// Resets the transcript to exactly two elements -- the system message
    /// and a user message carrying the serialized selection -- then sends
    /// it. Prior follow-up history is discarded. On success the assistant
    /// reply is appended and returned; on failure the transcript stays in
    /// its two-element state and [`SessionError::AssistantUnavailable`] is
    /// returned.
    ///
    /// Fails with [`SessionError::EmptySelection`] (no network call, no
    /// transcript change) when `selected` is empty.
    pub async fn start_routine_request<C: AssistantClient>(
        &mut self,
        client: &C,
        selected: &[RoutineProduct],
    ) -> Result<String, SessionError> {
        if selected.is_empty() {
            return Err(SessionError::EmptySelection);
        }

        let json = serde_json::to_string_pretty(selected)
            .expect("RoutineProduct serialization is infallible");

        // Hard reset: keep only the system message, then seed the new request.
        self.transcript.truncate(1);
        self.transcript
            .push(ChatMessage::user(format!("{ROUTINE_REQUEST_PREFIX}\n{json}")));

        debug!(products = selected.len(), "sending routine request");
        self.exchange(client).await
    }

    /// Ask a follow-up question about the current routine.
    ///
    /// Appends the (trimmed) question as a user message and sends the whole
    /// transcript. On failure the user message stays appended -- the
    /// question remains in history with no paired assistant turn, matching
    /// the reference behavior -- and `AssistantUnavailable` is returned.
    ///
    /// Fails with [`SessionError::EmptyQuestion`] (no network call, no
    /// transcript change) when the question is blank.
    pub async fn ask_followup<C: AssistantClient>(
        &mut self,
        client: &C,
        question: &str,
    ) -> Result<String, SessionError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(SessionError::EmptyQuestion);
        }

        self.transcript.push(ChatMessage::user(question));

        debug!(transcript_len = self.transcript.len(), "sending follow-up");
        self.exchange(client).await
    }

    /// Send the current transcript and append the reply on success.
    async fn exchange<C: AssistantClient>(&mut self, client: &C) -> Result<String, SessionError> {
        match client.send(&self.transcript).await {
            Ok(reply) => {
                self.transcript.push(ChatMessage::assistant(reply.clone()));
                Ok(reply)
            }
            Err(err) => {
                warn!(client = client.name(), error = %err, "assistant request failed");
                Err(SessionError::AssistantUnavailable(err.to_string()))
            }
        }
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}
