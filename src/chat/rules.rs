//! Server-side rule matching for `POST /chat`.
//!
//! DESIGN
//! ======
//! Rules are a JSON object of `keyword -> answer`. The incoming message is
//! lower-cased and trimmed, then the first keyword it contains wins, in file
//! order. Keywords are matched as written, so they should be lower-case.
//! Messages matching no keyword get the configured fallback reply.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{info, warn};

use super::{ChatBackend, ChatError};

/// Reply used when no rule matches and none is configured.
pub const DEFAULT_FALLBACK_REPLY: &str =
    "I'm not sure about that yet. Please ask about our treatments, appointments or wellness tips.";

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),
    #[error("rules file must be a JSON object of strings: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct RuleResponder {
    /// `(keyword, answer)` in file order.
    rules: Vec<(String, String)>,
    fallback: String,
}

impl RuleResponder {
    #[must_use]
    pub fn new(rules: Vec<(String, String)>, fallback: impl Into<String>) -> Self {
        Self { rules, fallback: fallback.into() }
    }

    /// Parse a rules document.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::Parse`] unless `json` is an object whose values
    /// are all strings.
    pub fn from_json(json: &str, fallback: impl Into<String>) -> Result<Self, RulesError> {
        let object: Map<String, Value> = serde_json::from_str(json).map_err(|e| RulesError::Parse(e.to_string()))?;
        let rules = object
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(answer) => Ok((key, answer)),
                other => Err(RulesError::Parse(format!("rule '{key}' has non-string answer {other}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules, fallback))
    }

    /// Load rules from `path`. A missing file yields an empty rule set.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path, fallback: impl Into<String>) -> Result<Self, RulesError> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let responder = Self::from_json(&json, fallback)?;
                info!(path = %path.display(), rules = responder.len(), "chat rules loaded");
                Ok(responder)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "rules file not found, only the fallback reply is available");
                Ok(Self::new(Vec::new(), fallback))
            }
            Err(e) => Err(e.into()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Answer of the first rule whose keyword occurs in `message`.
    #[must_use]
    pub fn matching(&self, message: &str) -> Option<&str> {
        let normalized = message.to_lowercase();
        let normalized = normalized.trim();
        self.rules
            .iter()
            .find(|(keyword, _)| normalized.contains(keyword.as_str()))
            .map(|(_, answer)| answer.as_str())
    }

    /// Matching answer, or the fallback reply.
    #[must_use]
    pub fn reply(&self, message: &str) -> &str {
        self.matching(message).unwrap_or(&self.fallback)
    }
}

#[async_trait::async_trait]
impl ChatBackend for RuleResponder {
    async fn send(&self, message: &str) -> Result<String, ChatError> {
        Ok(self.reply(message).to_owned())
    }
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;
