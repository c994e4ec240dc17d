use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::features::reports::models::{Report, ReportStatus, StatusStep};
use crate::features::triage::models::{Service, Severity};
use crate::shared::constants::{MAX_VICTIMS, MIN_DESCRIPTION_LENGTH};
use crate::shared::validation::MEDIA_FILENAME_REGEX;

/// Request DTO for submitting an emergency report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReportDto {
    #[validate(length(
        min = MIN_DESCRIPTION_LENGTH,
        message = "Description must be at least 10 characters"
    ))]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: String,

    #[serde(default)]
    #[validate(range(max = MAX_VICTIMS, message = "Victim count must be between 0 and 10"))]
    pub victims: u32,

    /// Free text: a phone number, "call me at ...", an extension
    #[serde(default)]
    #[validate(length(max = 100, message = "Contact must be at most 100 characters"))]
    pub contact: String,

    /// Attached evidence filenames
    #[serde(default)]
    #[validate(
        length(max = 10, message = "At most 10 attachments"),
        custom(function = "validate_media")
    )]
    pub media: Vec<String>,
}

/// Every attachment must be a bare filename
fn validate_media(media: &[String]) -> Result<(), ValidationError> {
    if media.iter().all(|name| MEDIA_FILENAME_REGEX.is_match(name)) {
        Ok(())
    } else {
        Err(ValidationError::new("media").with_message("Invalid attachment filename".into()))
    }
}

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: String,
    pub description: String,
    pub severity: Severity,
    pub services: Vec<Service>,
    pub status: ReportStatus,
    pub location: String,
    pub victims: u32,
    pub contact: String,
    pub created_at: DateTime<Utc>,
    pub media: Vec<String>,
    pub dispatch_message: String,
    pub reporter_name: String,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            description: r.description,
            severity: r.severity,
            services: r.services,
            status: r.status,
            location: r.location,
            victims: r.victims,
            contact: r.contact,
            created_at: r.created_at,
            media: r.media,
            dispatch_message: r.dispatch_message,
            reporter_name: r.reporter_name,
        }
    }
}

/// Response DTO for the tracking page: report plus status stepper
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportDetailResponseDto {
    #[serde(flatten)]
    pub report: ReportResponseDto,
    pub timeline: Vec<StatusStep>,
    /// Critical reports get the priority response banner
    pub priority_response: bool,
}

/// Request DTO for updating report status (admin only).
///
/// Any status is accepted, including moving backwards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
}

/// Filters of the admin report table
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportFilterQuery {
    /// Department filter: "all" or one of police, ambulance, fire
    #[serde(default, deserialize_with = "all_or_value")]
    #[param(value_type = Option<String>)]
    pub service: Option<Service>,

    /// Severity filter: "all" or one of low, medium, high, critical
    #[serde(default, deserialize_with = "all_or_value")]
    #[param(value_type = Option<String>)]
    pub severity: Option<Severity>,

    /// Case-insensitive match on report id or description
    pub search: Option<String>,
}

/// Treat missing, empty and "all" as "no filter"
fn all_or_value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(value) => serde_json::from_value(serde_json::Value::String(value.to_string()))
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
