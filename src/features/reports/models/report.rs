use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::features::reports::models::ReportStatus;
use crate::features::triage::models::{Service, Severity};

/// An emergency report held in the in-memory store
#[derive(Debug, Clone)]
pub struct Report {
    pub id: String,
    pub description: String,
    pub severity: Severity,
    pub services: Vec<Service>,
    /// The only field that changes after submission
    pub status: ReportStatus,
    pub location: String,
    pub victims: u32,
    pub contact: String,
    pub created_at: DateTime<Utc>,
    pub media: Vec<String>,
    pub dispatch_message: String,
    pub reporter_name: String,
    /// Submitting user; `None` for demo reports
    pub reporter_id: Option<Uuid>,
}

/// Data for creating a new report
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub description: String,
    pub location: String,
    pub victims: u32,
    pub contact: String,
    pub media: Vec<String>,
    pub reporter_name: String,
    pub reporter_id: Option<Uuid>,
}
