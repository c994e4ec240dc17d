use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Report detail is public so tracking links can be shared
pub fn public_routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/reports/{id}", get(handlers::get_report))
        .with_state(service)
}

/// Citizen routes (require auth middleware to be applied by caller)
pub fn protected_routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_my_reports).post(handlers::submit_report),
        )
        .with_state(service)
}

/// Admin routes; handlers check the role, the caller applies auth middleware
pub fn admin_routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/admin/reports", get(handlers::list_reports))
        .route(
            "/api/admin/reports/{id}/status",
            patch(handlers::update_report_status),
        )
        .with_state(service)
}
