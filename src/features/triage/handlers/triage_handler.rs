use axum::Json;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::triage::dtos::{TriagePreviewDto, TriagePreviewRequestDto};
use crate::features::triage::services::{classify, demo_presets, DemoPreset};
use crate::shared::types::ApiResponse;

/// Live AI analysis preview for the report form
#[utoipa::path(
    post,
    path = "/api/triage/preview",
    request_body = TriagePreviewRequestDto,
    responses(
        (status = 200, description = "Predicted services, severity and dispatch message", body = ApiResponse<TriagePreviewDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "triage"
)]
pub async fn preview(
    AppJson(dto): AppJson<TriagePreviewRequestDto>,
) -> Result<Json<ApiResponse<TriagePreviewDto>>> {
    dto.validate()?;

    let classification = classify(&dto.details());
    Ok(Json(ApiResponse::success(
        Some(classification.into()),
        None,
        None,
    )))
}

/// Demo presets for filling the report form
#[utoipa::path(
    get,
    path = "/api/triage/presets",
    responses(
        (status = 200, description = "Demo form presets", body = ApiResponse<Vec<DemoPreset>>)
    ),
    tag = "triage"
)]
pub async fn list_presets() -> Json<ApiResponse<Vec<DemoPreset>>> {
    Json(ApiResponse::success(Some(demo_presets().to_vec()), None, None))
}
