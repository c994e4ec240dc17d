use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::auth::SessionService;
use crate::features::i18n::handlers;

/// Public translation lookups
pub fn public_routes() -> Router {
    Router::new()
        .route("/api/i18n/{language}", get(handlers::get_translations))
        .route("/api/i18n/{language}/{key}", get(handlers::get_translation))
}

/// Per-session preferences (require a session)
pub fn protected_routes(sessions: Arc<SessionService>) -> Router {
    Router::new()
        .route(
            "/api/preferences/language",
            put(handlers::update_language),
        )
        .with_state(sessions)
}
