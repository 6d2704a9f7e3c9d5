//! Router assembly: HTTP endpoints, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;

/// Build the application router with:
/// - REST-ish API under `/api/v1/...`
/// - Static SPA from `./static` with index fallback
/// - CORS (allow any origin/method/headers) – adjust for production if needed
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    // Static files with SPA fallback
    let static_service = ServeDir::new("./static")
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new("./static/index.html"));

    Router::new()
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/catalog", get(http::http_catalog))
        // Accounts
        .route("/api/v1/auth/signup", post(http::http_signup))
        .route("/api/v1/auth/login", post(http::http_login))
        .route("/api/v1/users/:id", get(http::http_get_user))
        .route("/api/v1/users/:id/name", post(http::http_rename))
        .route("/api/v1/users/:id/password", post(http::http_change_password))
        .route("/api/v1/users/:id/role", post(http::http_set_role))
        .route("/api/v1/users/:id/learned", post(http::http_mark_learned))
        .route("/api/v1/users/:id/results", get(http::http_user_results))
        // Word bank
        .route("/api/v1/words", get(http::http_list_words).post(http::http_submit_word))
        .route("/api/v1/words/random", get(http::http_random_words))
        .route("/api/v1/words/:id/approve", post(http::http_approve_word))
        .route("/api/v1/words/:id/reject", post(http::http_reject_word))
        // Tricks
        .route("/api/v1/tricks", get(http::http_list_tricks).post(http::http_submit_trick))
        .route("/api/v1/tricks/:id/approve", post(http::http_approve_trick))
        .route("/api/v1/tricks/:id/reject", post(http::http_reject_trick))
        // Quiz
        .route("/api/v1/quiz/start", post(http::http_quiz_start))
        .route("/api/v1/quiz/answer", post(http::http_quiz_answer))
        .route("/api/v1/quiz/session", get(http::http_quiz_session))
        // Community
        .route("/api/v1/leaderboard", get(http::http_leaderboard))
        .route("/api/v1/stats", get(http::http_stats))
        // AI helpers
        .route("/api/v1/ai/sentence", post(http::http_ai_sentence))
        .route("/api/v1/ai/completion", post(http::http_ai_completion))
        .route("/api/v1/ai/explanation", post(http::http_ai_explanation))
        .route("/api/v1/ai/hint", post(http::http_ai_hint))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}
