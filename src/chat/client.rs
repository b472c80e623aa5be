//! HTTP chat backend posting to the server's `/chat` endpoint.

use std::time::Duration;

use tracing::debug;

use super::{ChatBackend, ChatError, ChatReply, ChatRequest};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 5;

pub struct HttpChatClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpChatClient {
    /// Client for the server at `base_url` (with or without trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &str) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ChatError::HttpClientBuild(e.to_string()))?;
        let endpoint = format!("{}/chat", base_url.trim_end_matches('/'));
        Ok(Self { http, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpChatClient {
    async fn send(&self, message: &str) -> Result<String, ChatError> {
        let body = ChatRequest { message: message.to_owned() };
        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status { status: status.as_u16() });
        }
        let reply: ChatReply = response.json().await.map_err(|e| ChatError::NetworkFailure(e.to_string()))?;
        debug!(endpoint = %self.endpoint, "chat reply received");
        Ok(reply.reply)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
