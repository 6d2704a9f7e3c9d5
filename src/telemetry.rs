//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! LOG_LEVEL holds a tracing filter ("debug", or full directives like
//! "info,store=debug,quiz=debug"). LOG_FORMAT picks the output shape:
//! "pretty" (default), "compact", or "json" for log shippers.
//!
//! Per-request spans come from the TraceLayer in the router; this sets up
//! the subscriber they land in.

use tracing_subscriber::EnvFilter;

/// Per-target defaults. Store, gamification and quiz internals are chatty
/// at debug; HTTP plumbing stays at info.
fn default_filter() -> EnvFilter {
    EnvFilter::new(
        "info,kelimeci_backend=debug,store=debug,gamify=debug,quiz=debug,groq=debug,moderation=info,tower_http=info,axum=info",
    )
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| default_filter());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    // The formats want different builder types, so each arm inits its own.
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        Ok("compact") => builder.compact().init(),
        _ => builder.init(),
    }
}
