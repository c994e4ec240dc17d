use axum::{extract::State, Json};
use std::sync::Arc;

use crate::features::auth::guards::RequireAdmin;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Get admin dashboard summary
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/summary",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_summary(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<DashboardService>>,
) -> Json<ApiResponse<DashboardSummaryDto>> {
    let summary = service.get_summary().await;
    Json(ApiResponse::success(Some(summary), None, None))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;
    use serde_json::Value;

    use crate::features::dashboard::{routes, DashboardService};
    use crate::features::reports::ReportService;
    use crate::shared::test_helpers::{create_admin_user, create_citizen_user, with_auth};

    fn service() -> Arc<DashboardService> {
        Arc::new(DashboardService::new(Arc::new(
            ReportService::with_demo_data(),
        )))
    }

    #[tokio::test]
    async fn test_admin_gets_summary() {
        let server = TestServer::new(with_auth(routes(service()), create_admin_user())).unwrap();

        let response = server.get("/api/admin/dashboard/summary").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["active_emergencies"], 3);
        assert_eq!(body["data"]["avg_response"], "8 min");
        assert_eq!(body["data"]["by_service"][2]["label"], "Fire Dept");
    }

    #[tokio::test]
    async fn test_citizen_is_forbidden() {
        let server =
            TestServer::new(with_auth(routes(service()), create_citizen_user())).unwrap();

        let response = server
            .get("/api/admin/dashboard/summary")
            .expect_failure()
            .await;

        response.assert_status_forbidden();
    }

    #[tokio::test]
    async fn test_anonymous_is_unauthorized() {
        let server = TestServer::new(routes(service())).unwrap();

        let response = server
            .get("/api/admin/dashboard/summary")
            .expect_failure()
            .await;

        response.assert_status_unauthorized();
    }
}
