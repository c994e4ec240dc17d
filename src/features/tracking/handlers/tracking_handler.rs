use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::reports::ReportService;
use crate::features::tracking::dtos::{TrackingQuery, TrackingResponseDto};
use crate::features::tracking::models::GeoPoint;
use crate::features::tracking::services::{advance, build_route, position_at, responder_units};
use crate::shared::types::ApiResponse;

/// State for tracking handlers
#[derive(Clone)]
pub struct TrackingState {
    pub report_service: Arc<ReportService>,
    /// Where every incident is drawn; the demo has no geocoding
    pub incident: GeoPoint,
}

/// Responder route and position for a report
#[utoipa::path(
    get,
    path = "/api/reports/{id}/tracking",
    params(
        ("id" = String, Path, description = "Report ID"),
        TrackingQuery
    ),
    responses(
        (status = 200, description = "Tracking view", body = ApiResponse<TrackingResponseDto>),
        (status = 400, description = "Progress out of range"),
        (status = 404, description = "Report not found")
    ),
    tag = "tracking"
)]
pub async fn get_tracking(
    State(state): State<TrackingState>,
    Path(id): Path<String>,
    AppQuery(query): AppQuery<TrackingQuery>,
) -> Result<Json<ApiResponse<TrackingResponseDto>>> {
    let progress = query.progress.unwrap_or(0.0);
    if !(0.0..=1.0).contains(&progress) {
        return Err(AppError::BadRequest(
            "progress must be between 0 and 1".to_string(),
        ));
    }

    let report = state.report_service.get(&id).await?;

    let route = build_route(state.incident);
    let units = responder_units(&report.services);
    let lead = units.first();

    let dto = TrackingResponseDto {
        report_id: report.id,
        status: report.status,
        incident: state.incident,
        responder_position: position_at(&route, progress),
        responder_name: lead.map(|u| u.name.clone()),
        eta_minutes: lead.map(|u| u.eta_minutes),
        route,
        progress,
        next_progress: advance(progress),
        units,
    };

    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;
    use serde_json::Value;

    use crate::core::config::DemoConfig;
    use crate::features::reports::models::CreateReport;
    use crate::features::reports::ReportService;
    use crate::features::tracking::routes;

    async fn server_with_report(description: &str) -> (TestServer, String) {
        let service = Arc::new(ReportService::new());
        let report = service
            .submit(CreateReport {
                description: description.to_string(),
                location: "Marina Beach".to_string(),
                victims: 1,
                contact: String::new(),
                media: vec![],
                reporter_name: "Test".to_string(),
                reporter_id: None,
            })
            .await
            .unwrap();

        let server = TestServer::new(routes(service, &DemoConfig::default())).unwrap();
        (server, report.id)
    }

    #[tokio::test]
    async fn test_tracking_view() {
        let (server, id) = server_with_report("Bike accident, rider injured").await;

        let response = server
            .get(&format!("/api/reports/{}/tracking", id))
            .add_query_param("progress", 0.5)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let data = &body["data"];
        assert_eq!(data["route"].as_array().unwrap().len(), 21);
        assert_eq!(data["incident"]["lat"], 13.0827);
        assert_eq!(data["responder_name"], "Ambulance Unit A3");
        assert_eq!(data["eta_minutes"], 8);
        assert_eq!(data["units"].as_array().unwrap().len(), 2);
        assert_eq!(data["units"][1]["name"], "Police Unit T7");
        assert_eq!(data["responder_position"], data["route"][10]);
    }

    #[tokio::test]
    async fn test_tracking_rejects_out_of_range_progress() {
        let (server, id) = server_with_report("Smoke coming out of the basement").await;

        let response = server
            .get(&format!("/api/reports/{}/tracking", id))
            .add_query_param("progress", 1.5)
            .expect_failure()
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_tracking_unknown_report() {
        let (server, _) = server_with_report("Smoke coming out of the basement").await;

        let response = server
            .get("/api/reports/RSQ-1/tracking")
            .expect_failure()
            .await;

        response.assert_status_not_found();
    }
}
