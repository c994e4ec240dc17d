use axum::{
    routing::{get, post},
    Router,
};

use crate::features::triage::handlers;

/// Public triage routes; the heuristic needs no state
pub fn routes() -> Router {
    Router::new()
        .route("/api/triage/preview", post(handlers::preview))
        .route("/api/triage/presets", get(handlers::list_presets))
}
