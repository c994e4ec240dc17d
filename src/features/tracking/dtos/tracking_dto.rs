use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::reports::models::ReportStatus;
use crate::features::tracking::models::{GeoPoint, ResponderUnit};

/// Animation progress along the route, 0 (start) to 1 (on scene)
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrackingQuery {
    #[param(minimum = 0.0, maximum = 1.0)]
    pub progress: Option<f64>,
}

/// Live map view of a report's responders
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrackingResponseDto {
    pub report_id: String,
    pub status: ReportStatus,
    pub incident: GeoPoint,
    pub route: Vec<GeoPoint>,
    pub progress: f64,
    /// Progress to request on the next animation tick
    pub next_progress: f64,
    pub responder_position: Option<GeoPoint>,
    /// Lead unit shown on the map overlay
    pub responder_name: Option<String>,
    pub eta_minutes: Option<u32>,
    pub units: Vec<ResponderUnit>,
}
