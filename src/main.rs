use panchsutra::chat::rules::RuleResponder;
use panchsutra::config::ServerConfig;
use panchsutra::routes::{self, ServerState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let responder =
        RuleResponder::load(&config.rules_path, config.fallback_reply.clone()).expect("failed to load chat rules");
    let state = ServerState::new(responder);

    let app = routes::app(state, &config.static_dir);
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, static_dir = %config.static_dir.display(), "panchsutra listening");
    axum::serve(listener, app).await.expect("server failed");
}
