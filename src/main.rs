//! Kelimeci · Exam Vocabulary Backend
//!
//! - Axum HTTP API for words, tricks, quizzes, and gamification
//! - Optional Groq integration for AI study helpers
//! - Optional OpenAI moderation for community submissions
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT                 : u16 (default 3000)
//!   GROQ_API_KEY         : enables the AI study helpers if present
//!   GROQ_BASE_URL        : default "https://api.groq.com/openai/v1"
//!   GROQ_MODEL           : default "llama-3.1-8b-instant"
//!   OPENAI_API_KEY       : enables submission moderation if present
//!   KELIMECI_CONFIG_PATH : path to TOML config (prompts, admins, extra words)
//!   LOG_LEVEL            : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT           : "pretty" (default), "compact", or "json"

mod telemetry;
mod util;
mod error;
mod domain;
mod streak;
mod badges;
mod scoring;
mod config;
mod seeds;
mod store;
mod auth;
mod gamify;
mod quiz;
mod groq;
mod moderation;
mod state;
mod protocol;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Build shared application state (store, seeded words, AI clients, prompts).
  let state = Arc::new(AppState::new().await);

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "kelimeci_backend", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
