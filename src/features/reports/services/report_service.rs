use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::ReportFilterQuery;
use crate::features::reports::models::{CreateReport, Report, ReportStatus};
use crate::features::reports::services::seed::demo_reports;
use crate::features::triage::models::IncidentDetails;
use crate::features::triage::services::classify;
use crate::shared::constants::REPORT_ID_PREFIX;
use crate::shared::types::PaginationQuery;

/// Service for report operations.
///
/// Reports live in memory for the lifetime of the process, oldest first.
pub struct ReportService {
    reports: RwLock<Vec<Report>>,
    last_id_millis: AtomicI64,
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportService {
    pub fn new() -> Self {
        Self {
            reports: RwLock::new(Vec::new()),
            last_id_millis: AtomicI64::new(0),
        }
    }

    /// Store preloaded with the demo reports
    pub fn with_demo_data() -> Self {
        let mut reports = demo_reports(Utc::now());
        reports.sort_by_key(|r| r.created_at);
        let last_id_millis = reports
            .iter()
            .map(|r| r.created_at.timestamp_millis())
            .max()
            .unwrap_or_default();

        tracing::info!("Loaded {} demo reports", reports.len());

        Self {
            reports: RwLock::new(reports),
            last_id_millis: AtomicI64::new(last_id_millis),
        }
    }

    /// Generate an identifier in format: RSQ-<epoch millis>.
    ///
    /// Two submissions in the same millisecond get consecutive numbers.
    fn next_id(&self, now_millis: i64) -> String {
        let previous = self
            .last_id_millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now_millis.max(last + 1))
            })
            .unwrap_or(now_millis);

        format!("{}-{}", REPORT_ID_PREFIX, now_millis.max(previous + 1))
    }

    /// Classify and store a new report. Status starts as `received`.
    pub async fn submit(&self, data: CreateReport) -> Result<Report> {
        let classification = classify(&IncidentDetails {
            description: &data.description,
            victims: data.victims,
            location: &data.location,
            contact: &data.contact,
        });

        let created_at = Utc::now();
        let report = Report {
            id: self.next_id(created_at.timestamp_millis()),
            description: data.description,
            severity: classification.severity,
            services: classification.services,
            status: ReportStatus::Received,
            location: data.location,
            victims: data.victims,
            contact: data.contact,
            created_at,
            media: data.media,
            dispatch_message: classification.dispatch_message,
            reporter_name: data.reporter_name,
            reporter_id: data.reporter_id,
        };

        self.reports.write().await.push(report.clone());

        tracing::info!(
            "Report {} submitted: severity={}, services={:?}",
            report.id,
            report.severity,
            report.services
        );

        Ok(report)
    }

    /// Get report by ID
    pub async fn get(&self, id: &str) -> Result<Report> {
        self.reports
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Reports submitted by one user, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> Vec<Report> {
        self.reports
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| r.reporter_id == Some(user_id))
            .cloned()
            .collect()
    }

    /// Every report, newest first
    pub async fn list_all(&self) -> Vec<Report> {
        self.reports.read().await.iter().rev().cloned().collect()
    }

    /// Admin table: filtered, newest first, one page at a time.
    ///
    /// Returns the page and the number of reports matching the filter.
    pub async fn list_filtered(
        &self,
        filter: &ReportFilterQuery,
        pagination: &PaginationQuery,
    ) -> (Vec<Report>, i64) {
        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let matching: Vec<Report> = self
            .reports
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| filter.service.is_none_or(|s| r.services.contains(&s)))
            .filter(|r| filter.severity.is_none_or(|s| r.severity == s))
            .filter(|r| {
                search.as_deref().is_none_or(|q| {
                    r.id.to_lowercase().contains(q) || r.description.to_lowercase().contains(q)
                })
            })
            .cloned()
            .collect();

        pagination.paginate(matching)
    }

    /// Replace a report's status. Any transition is accepted, including
    /// moving backwards or reopening a resolved report.
    pub async fn update_status(&self, id: &str, status: ReportStatus) -> Result<Report> {
        let mut reports = self.reports.write().await;
        let report = reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        let previous = report.status;
        report.status = status;

        if status < previous {
            tracing::warn!(
                "Report {} moved back from {} to {}",
                report.id,
                previous,
                status
            );
        } else {
            tracing::info!("Report {} status: {} -> {}", report.id, previous, status);
        }

        Ok(report.clone())
    }
}
