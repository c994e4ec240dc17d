use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{
    CreateReportDto, ReportDetailResponseDto, ReportFilterQuery, ReportResponseDto,
    UpdateReportStatusDto,
};
use crate::features::reports::models::{status_timeline, CreateReport};
use crate::features::reports::services::ReportService;
use crate::features::triage::models::Severity;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Submit an emergency report
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report submitted", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn submit_report(
    user: AuthenticatedUser,
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    dto.validate()?;

    let report = service
        .submit(CreateReport {
            description: dto.description,
            location: dto.location.trim().to_string(),
            victims: dto.victims,
            contact: dto.contact.trim().to_string(),
            media: dto.media,
            reporter_name: user.user.name,
            reporter_id: Some(user.user.id),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(report.into()),
            Some("Emergency report submitted".to_string()),
            None,
        )),
    ))
}

/// List reports submitted by the authenticated user
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "List of user's reports", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn list_my_reports(
    user: AuthenticatedUser,
    State(service): State<Arc<ReportService>>,
) -> Json<ApiResponse<Vec<ReportResponseDto>>> {
    let reports = service.list_for_user(user.user.id).await;
    let total = reports.len() as i64;
    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();
    Json(ApiResponse::success(Some(dtos), None, Some(Meta { total })))
}

/// Get a report with its status timeline (public tracking link)
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID, e.g. RSQ-1718000000000")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportDetailResponseDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ReportDetailResponseDto>>> {
    let report = service.get(&id).await?;

    let dto = ReportDetailResponseDto {
        timeline: status_timeline(report.status),
        priority_response: report.severity == Severity::Critical,
        report: report.into(),
    };

    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// List all reports with filters (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    params(ReportFilterQuery, PaginationQuery),
    responses(
        (status = 200, description = "Filtered reports", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 400, description = "Invalid filter"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn list_reports(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ReportService>>,
    AppQuery(filter): AppQuery<ReportFilterQuery>,
    AppQuery(pagination): AppQuery<PaginationQuery>,
) -> Json<ApiResponse<Vec<ReportResponseDto>>> {
    let (reports, total) = service.list_filtered(&filter, &pagination).await;
    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();
    Json(ApiResponse::success(Some(dtos), None, Some(Meta { total })))
}

/// Update report status (admin only)
#[utoipa::path(
    patch,
    path = "/api/admin/reports/{id}/status",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Unknown status"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn update_report_status(
    RequireAdmin(admin): RequireAdmin,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.update_status(&id, dto.status).await?;
    tracing::debug!("Status of {} set by {}", report.id, admin.user.id);

    Ok(Json(ApiResponse::success(
        Some(report.into()),
        Some("Status updated successfully".to_string()),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::reports::routes;
    use crate::features::reports::services::ReportService;
    use crate::shared::test_helpers::{create_admin_user, create_citizen_user, with_auth};

    fn app(service: Arc<ReportService>) -> Router {
        routes::public_routes(service.clone())
            .merge(routes::protected_routes(service.clone()))
            .merge(routes::admin_routes(service))
    }

    #[tokio::test]
    async fn test_submit_and_track_report() {
        let service = Arc::new(ReportService::new());
        let server =
            TestServer::new(with_auth(app(service.clone()), create_citizen_user())).unwrap();

        let response = server
            .post("/api/reports")
            .json(&json!({
                "description": "Critical explosion at the mall",
                "location": "Phoenix Mall, Velachery",
                "victims": 0,
                "contact": "+91 98400 12345",
                "media": ["blast.jpg"]
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["severity"], "critical");
        assert_eq!(body["data"]["status"], "received");
        assert_eq!(body["data"]["reporter_name"], "priya");
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let detail: Value = server.get(&format!("/api/reports/{}", id)).await.json();
        assert_eq!(detail["data"]["id"], id.as_str());
        assert_eq!(detail["data"]["priority_response"], true);
        assert_eq!(detail["data"]["timeline"][0]["completed"], true);
        assert_eq!(detail["data"]["timeline"][0]["current"], true);
        assert_eq!(detail["data"]["timeline"][1]["completed"], false);

        let mine: Value = server.get("/api/reports").await.json();
        assert_eq!(mine["meta"]["total"], 1);
    }

    #[tokio::test]
    async fn test_submit_rejects_short_description() {
        let service = Arc::new(ReportService::new());
        let server = TestServer::new(with_auth(app(service), create_citizen_user())).unwrap();

        let response = server
            .post("/api/reports")
            .json(&json!({ "description": "help", "victims": 0 }))
            .expect_failure()
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_submit_requires_session() {
        let service = Arc::new(ReportService::new());
        let server = TestServer::new(app(service)).unwrap();

        let response = server
            .post("/api/reports")
            .json(&json!({ "description": "Fire in the building lobby" }))
            .expect_failure()
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_unknown_report_is_not_found() {
        let server = TestServer::new(app(Arc::new(ReportService::new()))).unwrap();

        let response = server.get("/api/reports/RSQ-42").expect_failure().await;
        response.assert_status_not_found();

        let dashed = server
            .get("/api/reports/RSQ-2024-0847")
            .expect_failure()
            .await;
        dashed.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_submit_accepts_free_text_contact() {
        let service = Arc::new(ReportService::new());
        let server = TestServer::new(with_auth(app(service), create_citizen_user())).unwrap();

        let response = server
            .post("/api/reports")
            .json(&json!({
                "description": "Bike accident near the signal",
                "victims": 1,
                "contact": "call me at 98400 12345"
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["contact"], "call me at 98400 12345");
    }

    #[tokio::test]
    async fn test_citizen_cannot_use_admin_routes() {
        let service = Arc::new(ReportService::with_demo_data());
        let server = TestServer::new(with_auth(app(service), create_citizen_user())).unwrap();

        let response = server.get("/api/admin/reports").expect_failure().await;
        response.assert_status_forbidden();
    }

    #[tokio::test]
    async fn test_admin_filters_and_updates_status() {
        let service = Arc::new(ReportService::with_demo_data());
        let server =
            TestServer::new(with_auth(app(service.clone()), create_admin_user())).unwrap();

        let all: Value = server.get("/api/admin/reports?service=all").await.json();
        assert_eq!(all["meta"]["total"], 5);

        let critical: Value = server
            .get("/api/admin/reports?severity=critical")
            .await
            .json();
        assert_eq!(critical["meta"]["total"], 1);

        let paged: Value = server
            .get("/api/admin/reports?page=1&page_size=2")
            .await
            .json();
        assert_eq!(paged["data"].as_array().unwrap().len(), 2);
        assert_eq!(paged["meta"]["total"], 5);

        let far: Value = server
            .get("/api/admin/reports?page=9223372036854775807")
            .await
            .json();
        assert!(far["data"].as_array().unwrap().is_empty());
        assert_eq!(far["meta"]["total"], 5);

        let bad = server
            .get("/api/admin/reports?severity=extreme")
            .expect_failure()
            .await;
        bad.assert_status_bad_request();

        let id = all["data"][0]["id"].as_str().unwrap().to_string();
        let updated: Value = server
            .patch(&format!("/api/admin/reports/{}/status", id))
            .json(&json!({ "status": "on-the-way" }))
            .await
            .json();
        assert_eq!(updated["data"]["status"], "on-the-way");

        // Moving backwards is allowed
        let reverted: Value = server
            .patch(&format!("/api/admin/reports/{}/status", id))
            .json(&json!({ "status": "received" }))
            .await
            .json();
        assert_eq!(reverted["data"]["status"], "received");

        let missing = server
            .patch("/api/admin/reports/RSQ-1/status")
            .json(&json!({ "status": "resolved" }))
            .expect_failure()
            .await;
        missing.assert_status_not_found();
    }
}
