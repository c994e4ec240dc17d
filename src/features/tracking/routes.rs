use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::config::DemoConfig;
use crate::features::reports::ReportService;
use crate::features::tracking::handlers::{self, TrackingState};
use crate::features::tracking::models::GeoPoint;

/// Public tracking routes; anyone with the report id can follow it
pub fn routes(report_service: Arc<ReportService>, demo: &DemoConfig) -> Router {
    let state = TrackingState {
        report_service,
        incident: GeoPoint::new(demo.incident_lat, demo.incident_lng),
    };

    Router::new()
        .route("/api/reports/{id}/tracking", get(handlers::get_tracking))
        .with_state(state)
}
