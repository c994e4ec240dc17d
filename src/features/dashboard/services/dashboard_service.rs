use std::sync::Arc;

use crate::features::dashboard::dtos::{
    DashboardSummaryDto, ServiceCountDto, SeverityCountDto, StatusCountDto,
};
use crate::features::reports::models::{Report, ReportStatus};
use crate::features::reports::ReportService;
use crate::features::triage::models::{Service, Severity};

/// Response time shown on the dashboard; the demo does not measure it
const AVG_RESPONSE_LABEL: &str = "8 min";

/// Service for admin dashboard statistics
pub struct DashboardService {
    report_service: Arc<ReportService>,
}

impl DashboardService {
    pub fn new(report_service: Arc<ReportService>) -> Self {
        Self { report_service }
    }

    /// Counts over every report currently in the store
    pub async fn get_summary(&self) -> DashboardSummaryDto {
        let reports = self.report_service.list_all().await;
        summarize(&reports)
    }
}

fn count(reports: &[Report], pred: impl Fn(&Report) -> bool) -> i64 {
    reports.iter().filter(|&r| pred(r)).count() as i64
}

fn summarize(reports: &[Report]) -> DashboardSummaryDto {
    let by_severity = Severity::ALL
        .iter()
        .map(|&severity| SeverityCountDto {
            severity,
            label: severity.label().to_string(),
            count: count(reports, |r| r.severity == severity),
        })
        .collect();

    let by_service = Service::ALL
        .iter()
        .map(|&service| ServiceCountDto {
            service,
            label: service.label().to_string(),
            count: count(reports, |r| r.services.contains(&service)),
        })
        .collect();

    let by_status = ReportStatus::ALL
        .iter()
        .map(|&status| StatusCountDto {
            status,
            label: status.label().to_string(),
            count: count(reports, |r| r.status == status),
        })
        .collect();

    DashboardSummaryDto {
        total_reports: reports.len() as i64,
        active_emergencies: count(reports, |r| !r.status.is_terminal()),
        critical_cases: count(reports, |r| r.severity == Severity::Critical),
        resolved_count: count(reports, |r| r.status.is_terminal()),
        avg_response: AVG_RESPONSE_LABEL.to_string(),
        by_severity,
        by_service,
        by_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_summary_of_demo_data() {
        let reports = Arc::new(ReportService::with_demo_data());
        let service = DashboardService::new(reports.clone());

        let summary = service.get_summary().await;
        assert_eq!(summary.total_reports, 5);
        assert_eq!(summary.active_emergencies, 3);
        assert_eq!(summary.resolved_count, 2);
        assert_eq!(summary.critical_cases, 1);
        assert_eq!(summary.avg_response, "8 min");

        let severity_total: i64 = summary.by_severity.iter().map(|s| s.count).sum();
        assert_eq!(severity_total, 5);
        let status_total: i64 = summary.by_status.iter().map(|s| s.count).sum();
        assert_eq!(status_total, 5);
    }

    #[tokio::test]
    async fn test_summary_follows_status_changes() {
        let reports = Arc::new(ReportService::with_demo_data());
        let service = DashboardService::new(reports.clone());

        for report in reports.list_all().await {
            reports
                .update_status(&report.id, ReportStatus::Resolved)
                .await
                .unwrap();
        }

        let summary = service.get_summary().await;
        assert_eq!(summary.active_emergencies, 0);
        assert_eq!(summary.resolved_count, 5);
    }

    #[test]
    fn test_summary_of_empty_store() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_reports, 0);
        assert_eq!(summary.by_service.len(), 3);
        assert!(summary.by_service.iter().all(|s| s.count == 0));
    }
}
