//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One axum router serves the chat endpoint and a health check, with the
//! static site (landing page, login, dashboards) as the fallback service.
//! CORS is fully permissive so the pages also work when opened from another
//! origin during development.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::chat::rules::RuleResponder;
use crate::chat::{ChatReply, ChatRequest};

/// Shared server state.
#[derive(Clone)]
pub struct ServerState {
    pub responder: Arc<RuleResponder>,
}

impl ServerState {
    #[must_use]
    pub fn new(responder: RuleResponder) -> Self {
        Self { responder: Arc::new(responder) }
    }
}

/// API routes only, without static files.
pub fn api_routes(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes, static site fallback and request tracing.
pub fn app(state: ServerState, static_dir: &Path) -> Router {
    let site = ServeDir::new(static_dir).append_index_html_on_directories(true);
    api_routes(state)
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
}

/// `POST /chat`: keyword reply for `{message}`.
pub async fn chat(State(state): State<ServerState>, Json(req): Json<ChatRequest>) -> Json<ChatReply> {
    let reply = state.responder.reply(&req.message).to_owned();
    debug!(message_len = req.message.len(), "chat answered");
    Json(ChatReply { reply })
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
