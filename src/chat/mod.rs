//! Chat widget: wire types, backends and the visible message log.
//!
//! ARCHITECTURE
//! ============
//! The widget talks to a [`ChatBackend`]. Two implementations exist on the
//! client side:
//!
//! - [`client::HttpChatClient`] posts to the `/chat` endpoint,
//! - [`scripted::ScriptedAssistant`] answers from the patient dashboard's
//!   canned replies without any network.
//!
//! The server side of `/chat` is [`rules::RuleResponder`].
//!
//! ERROR HANDLING
//! ==============
//! Every backend failure is a [`ChatError`]. [`ChatLog::submit`] turns any
//! of them into a fixed assistant line; there are no retries.

pub mod client;
pub mod rules;
pub mod scripted;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Assistant line shown when the backend cannot be reached.
pub const CONNECTION_ERROR_REPLY: &str = "⚠ Error connecting to server.";

// =============================================================================
// WIRE TYPES
// =============================================================================

/// `POST /chat` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// `POST /chat` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

// =============================================================================
// BACKEND
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// Request could not be sent, or the response was not a chat reply.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The endpoint answered with a non-success status.
    #[error("chat endpoint returned status {status}")]
    Status { status: u16 },

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Anything that can answer a chat message.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, message: &str) -> Result<String, ChatError>;
}

// =============================================================================
// MESSAGE LOG
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    You,
    Assistant,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::You => "You",
            Self::Assistant => "Assistant",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub sender: Sender,
    pub text: String,
}

/// Lines shown in the chat widget, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    lines: Vec<ChatLine>,
}

impl ChatLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[ChatLine] {
        &self.lines
    }

    /// Send the input box contents.
    ///
    /// Blank input is ignored and returns `false`. Otherwise the trimmed
    /// message is appended as the user's line, then the backend's reply (or
    /// [`CONNECTION_ERROR_REPLY`]) as the assistant's.
    pub async fn submit(&mut self, backend: &dyn ChatBackend, input: &str) -> bool {
        let message = input.trim();
        if message.is_empty() {
            return false;
        }
        self.push(Sender::You, message);

        let reply = match backend.send(message).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "chat request failed");
                CONNECTION_ERROR_REPLY.to_owned()
            }
        };
        self.push(Sender::Assistant, reply);
        true
    }

    fn push(&mut self, sender: Sender, text: impl Into<String>) {
        self.lines.push(ChatLine { sender, text: text.into() });
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
