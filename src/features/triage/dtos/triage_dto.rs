use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::triage::models::{Classification, IncidentDetails, Service, Severity};
use crate::shared::constants::MAX_VICTIMS;

/// Current state of the report form, sent on every field change
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct TriagePreviewRequestDto {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(range(max = MAX_VICTIMS, message = "Victim count must be between 0 and 10"))]
    pub victims: u32,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub contact: String,
}

impl TriagePreviewRequestDto {
    pub fn details(&self) -> IncidentDetails<'_> {
        IncidentDetails {
            description: &self.description,
            victims: self.victims,
            location: &self.location,
            contact: &self.contact,
        }
    }
}

/// AI analysis preview shown next to the report form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TriagePreviewDto {
    /// False while the description is too short; the panel shows a placeholder
    pub has_content: bool,
    pub services: Vec<Service>,
    pub severity: Severity,
    pub severity_label: String,
    pub dispatch_message: String,
}

impl From<Classification> for TriagePreviewDto {
    fn from(c: Classification) -> Self {
        Self {
            has_content: !c.dispatch_message.is_empty(),
            services: c.services,
            severity: c.severity,
            severity_label: c.severity.label().to_string(),
            dispatch_message: c.dispatch_message,
        }
    }
}
