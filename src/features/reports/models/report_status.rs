use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Report lifecycle, in handling order. `Resolved` is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    Received,
    Preparing,
    Dispatched,
    OnTheWay,
    InProgress,
    Resolved,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 6] = [
        ReportStatus::Received,
        ReportStatus::Preparing,
        ReportStatus::Dispatched,
        ReportStatus::OnTheWay,
        ReportStatus::InProgress,
        ReportStatus::Resolved,
    ];

    /// Position in the lifecycle, starting at 0
    pub fn index(&self) -> usize {
        match self {
            ReportStatus::Received => 0,
            ReportStatus::Preparing => 1,
            ReportStatus::Dispatched => 2,
            ReportStatus::OnTheWay => 3,
            ReportStatus::InProgress => 4,
            ReportStatus::Resolved => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Received => "Request Received",
            ReportStatus::Preparing => "Preparing Response",
            ReportStatus::Dispatched => "Team Dispatched",
            ReportStatus::OnTheWay => "On the Way",
            ReportStatus::InProgress => "Action in Progress",
            ReportStatus::Resolved => "Resolved",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportStatus::Received => "Emergency report logged into system",
            ReportStatus::Preparing => "Assigning appropriate response teams",
            ReportStatus::Dispatched => "Response team has been deployed",
            ReportStatus::OnTheWay => "Response team en route to location",
            ReportStatus::InProgress => "Response team on scene, handling situation",
            ReportStatus::Resolved => "Emergency has been resolved successfully",
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == ReportStatus::Resolved
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Received => write!(f, "received"),
            ReportStatus::Preparing => write!(f, "preparing"),
            ReportStatus::Dispatched => write!(f, "dispatched"),
            ReportStatus::OnTheWay => write!(f, "on-the-way"),
            ReportStatus::InProgress => write!(f, "in-progress"),
            ReportStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// One row of the status stepper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusStep {
    pub key: ReportStatus,
    pub label: String,
    pub description: String,
    /// Every step up to and including the current one
    pub completed: bool,
    pub current: bool,
}

/// Stepper view of the whole lifecycle for a report at `current`
pub fn status_timeline(current: ReportStatus) -> Vec<StatusStep> {
    let current_idx = current.index();

    ReportStatus::ALL
        .iter()
        .map(|step| StatusStep {
            key: *step,
            label: step.label().to_string(),
            description: step.description().to_string(),
            completed: step.index() <= current_idx,
            current: step.index() == current_idx,
        })
        .collect()
}
