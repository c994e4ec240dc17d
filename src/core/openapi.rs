use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::i18n::{
    dtos as i18n_dtos, handlers as i18n_handlers, models as i18n_models,
};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::tracking::{
    dtos as tracking_dtos, handlers as tracking_handlers, models as tracking_models,
};
use crate::features::triage::{
    dtos as triage_dtos, handlers as triage_handlers, models as triage_models,
    services as triage_services,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::signup,
        auth::handlers::logout,
        auth::handlers::get_me,
        // Triage (public)
        triage_handlers::preview,
        triage_handlers::list_presets,
        // Reports
        reports_handlers::submit_report,
        reports_handlers::list_my_reports,
        reports_handlers::get_report,
        // Tracking (public)
        tracking_handlers::get_tracking,
        // Admin
        reports_handlers::list_reports,
        reports_handlers::update_report_status,
        // Dashboard (admin)
        dashboard_handlers::get_summary,
        // I18n
        i18n_handlers::get_translations,
        i18n_handlers::get_translation,
        i18n_handlers::update_language,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::UserRole,
            auth::model::User,
            auth::dtos::LoginRequestDto,
            auth::dtos::SignupRequestDto,
            auth::dtos::AuthResponseDto,
            auth::dtos::MeResponseDto,
            ApiResponse<auth::dtos::AuthResponseDto>,
            ApiResponse<auth::dtos::MeResponseDto>,
            // Triage
            triage_models::Severity,
            triage_models::Service,
            triage_models::Classification,
            triage_dtos::TriagePreviewRequestDto,
            triage_dtos::TriagePreviewDto,
            triage_services::DemoPreset,
            ApiResponse<triage_dtos::TriagePreviewDto>,
            ApiResponse<Vec<triage_services::DemoPreset>>,
            // Reports
            reports_models::ReportStatus,
            reports_models::StatusStep,
            reports_dtos::CreateReportDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::ReportDetailResponseDto,
            reports_dtos::UpdateReportStatusDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            ApiResponse<reports_dtos::ReportDetailResponseDto>,
            // Tracking
            tracking_models::GeoPoint,
            tracking_models::ResponderUnit,
            tracking_dtos::TrackingResponseDto,
            ApiResponse<tracking_dtos::TrackingResponseDto>,
            // Dashboard
            dashboard_dtos::SeverityCountDto,
            dashboard_dtos::ServiceCountDto,
            dashboard_dtos::StatusCountDto,
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            // I18n
            i18n_models::Language,
            i18n_dtos::LanguagePreferenceDto,
            i18n_dtos::TranslationsDto,
            i18n_dtos::TranslationDto,
            ApiResponse<i18n_dtos::TranslationsDto>,
            ApiResponse<i18n_dtos::TranslationDto>,
            ApiResponse<i18n_models::Language>,
        )
    ),
    tags(
        (name = "auth", description = "Demo sign-in and sessions"),
        (name = "triage", description = "Keyword classification of incident descriptions (public)"),
        (name = "reports", description = "Emergency reports and their status timeline"),
        (name = "tracking", description = "Simulated responder route (public)"),
        (name = "admin", description = "Report management (admin only)"),
        (name = "dashboard", description = "Admin dashboard statistics"),
        (name = "i18n", description = "Display language and translations"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "ResQ API",
        version = "0.1.0",
        description = "API documentation for the ResQ emergency dashboard",
    )
)]
pub struct ApiDoc;

/// Adds the session bearer token scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("opaque session token")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/auth/login",
            "/api/triage/preview",
            "/api/reports",
            "/api/reports/{id}",
            "/api/reports/{id}/tracking",
            "/api/admin/reports/{id}/status",
            "/api/admin/dashboard/summary",
            "/api/preferences/language",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {}",
                expected
            );
        }
    }
}
