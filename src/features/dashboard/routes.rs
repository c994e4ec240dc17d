use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Admin dashboard routes (auth middleware applied by caller)
pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/admin/dashboard/summary", get(handlers::get_summary))
        .with_state(dashboard_service)
}
