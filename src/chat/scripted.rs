//! Offline assistant on the patient dashboard.
//!
//! Answers a handful of suggested questions verbatim and everything else
//! with a generic reply, after a short simulated "thinking" delay.

use std::time::Duration;

use super::{ChatBackend, ChatError};

pub const THINKING_DELAY: Duration = Duration::from_millis(1000);

/// Suggested questions shown as buttons, with their answers.
pub const CANNED_REPLIES: [(&str, &str); 4] = [
    (
        "how is my progress?",
        "You're doing excellent! You've completed 75% of your treatment plan and your wellness metrics show \
         significant improvement. Keep up the great work!",
    ),
    (
        "remind me about today's activities",
        "Today you have: 1) Herbal Tea (Evening) - Pending, 2) Breathing Exercise (15 min) - Pending. You've \
         already completed your morning meditation. Great job!",
    ),
    (
        "healthy recipe suggestions",
        "Based on your treatment plan, I recommend: 1) Turmeric Golden Milk for evening, 2) Ginger-Honey Tea for \
         digestion, 3) Quinoa Buddha Bowl for lunch. Would you like detailed recipes?",
    ),
    (
        "meditation tips",
        "For better meditation: 1) Find a quiet space, 2) Start with 5-10 minutes daily, 3) Focus on your breath, \
         4) Don't judge your thoughts, just observe them. Consistency is key!",
    ),
];

pub const DEFAULT_REPLY: &str = "I understand your question. Based on your current treatment plan and progress, I \
                                 recommend continuing with your prescribed activities. For specific medical \
                                 advice, please consult with Dr. Sharma during your next appointment.";

#[derive(Debug, Clone)]
pub struct ScriptedAssistant {
    delay: Duration,
}

impl ScriptedAssistant {
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(THINKING_DELAY)
    }

    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Canned answer for an exact (case-insensitive) question match.
    #[must_use]
    pub fn answer(question: &str) -> &'static str {
        let key = question.to_lowercase();
        CANNED_REPLIES
            .iter()
            .find(|(q, _)| *q == key)
            .map_or(DEFAULT_REPLY, |&(_, reply)| reply)
    }
}

impl Default for ScriptedAssistant {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ChatBackend for ScriptedAssistant {
    async fn send(&self, message: &str) -> Result<String, ChatError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Self::answer(message).to_owned())
    }
}

#[cfg(test)]
#[path = "scripted_test.rs"]
mod tests;
