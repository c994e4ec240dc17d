use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Incident severity, lowest first
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Responder category a report may require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Police,
    Ambulance,
    Fire,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::Police, Service::Ambulance, Service::Fire];

    /// Label used in dispatch messages and the UI
    pub fn label(&self) -> &'static str {
        match self {
            Service::Police => "Police",
            Service::Ambulance => "Ambulance",
            Service::Fire => "Fire Dept",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Service::Police => write!(f, "police"),
            Service::Ambulance => write!(f, "ambulance"),
            Service::Fire => write!(f, "fire"),
        }
    }
}

/// The report form fields the classifier looks at
#[derive(Debug, Clone, Default)]
pub struct IncidentDetails<'a> {
    pub description: &'a str,
    pub victims: u32,
    pub location: &'a str,
    pub contact: &'a str,
}

/// Result of running the keyword heuristic over a report form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Classification {
    /// Deduplicated, in fire / ambulance / police order
    pub services: Vec<Service>,
    pub severity: Severity,
    /// Empty until the description is long enough to analyse
    pub dispatch_message: String,
}
