//! Touchline API Server
//!
//! Loads the rules document, assembles the system instruction, and serves
//! the chat page and the `/chat` endpoint.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod adapters;
mod config;
mod routes;
mod services;

use config::Config;
use services::openai::OpenAiProvider;
use touchline::{instructions, CompletionProvider};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    /// System instruction assembled once at startup, read-only thereafter.
    pub instructions: Arc<str>,
    pub provider: Arc<dyn CompletionProvider>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("⚽ Touchline initializing...");

    match dotenv {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(_) => tracing::debug!("No .env file found"),
    }

    let config = Config::from_env()?;

    if config.api_key.is_empty() {
        tracing::warn!("⚠️  No OPENAI_API_KEY set - completion requests will fail");
    } else {
        tracing::info!("🔑 OpenAI API key loaded");
    }

    // Load the rules document once; every request reads the result.
    let loaded = adapters::rules::load_rules(&config.rules_path);
    match &loaded {
        Ok(text) => tracing::info!("📄 Rules document loaded ({} chars)", text.len()),
        Err(err) => tracing::warn!(
            "⚠️  {} - applying '{}' policy",
            err,
            config.rules_policy
        ),
    }
    let rules_text = config
        .rules_policy
        .apply(loaded)
        .context("rules document unavailable and policy is 'fail'")?;

    let instructions: Arc<str> = instructions::build_instructions(&rules_text).into();
    let provider = Arc::new(OpenAiProvider::new(&config));

    let state = AppState {
        instructions,
        provider,
    };

    let router = Router::new()
        .route("/health", get(health_check))
        .merge(routes::chat::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!("✅ Touchline ready on http://{}", config.bind);

    axum::serve(listener, router).await.context("server error")
}
