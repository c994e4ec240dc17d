use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::reports::models::ReportStatus;
use crate::features::triage::models::{Service, Severity};

/// Header statistics of the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub total_reports: i64,
    /// Reports not yet resolved
    pub active_emergencies: i64,
    pub critical_cases: i64,
    pub resolved_count: i64,
    /// Display label, e.g. "8 min"
    pub avg_response: String,
    pub by_severity: Vec<SeverityCountDto>,
    pub by_service: Vec<ServiceCountDto>,
    pub by_status: Vec<StatusCountDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeverityCountDto {
    pub severity: Severity,
    pub label: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceCountDto {
    pub service: Service,
    pub label: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusCountDto {
    pub status: ReportStatus,
    pub label: String,
    pub count: i64,
}
