use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::SessionService;
use crate::features::i18n::dtos::{LanguagePreferenceDto, TranslationDto, TranslationsDto};
use crate::features::i18n::models::Language;
use crate::features::i18n::services::{dictionary, translate};
use crate::shared::types::ApiResponse;

fn parse_language(raw: &str) -> Result<Language> {
    raw.parse::<Language>().map_err(AppError::BadRequest)
}

/// Get every UI string for a language
#[utoipa::path(
    get,
    path = "/api/i18n/{language}",
    params(
        ("language" = String, Path, description = "Language code (en, ta)")
    ),
    responses(
        (status = 200, description = "Translation dictionary", body = ApiResponse<TranslationsDto>),
        (status = 400, description = "Unsupported language")
    ),
    tag = "i18n"
)]
pub async fn get_translations(
    Path(language): Path<String>,
) -> Result<Json<ApiResponse<TranslationsDto>>> {
    let language = parse_language(&language)?;
    let entries = dictionary(language)
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    Ok(Json(ApiResponse::success(
        Some(TranslationsDto { language, entries }),
        None,
        None,
    )))
}

/// Look up a single UI string; unknown keys are echoed back
#[utoipa::path(
    get,
    path = "/api/i18n/{language}/{key}",
    params(
        ("language" = String, Path, description = "Language code (en, ta)"),
        ("key" = String, Path, description = "Dotted translation key, e.g. nav.home")
    ),
    responses(
        (status = 200, description = "Translated string", body = ApiResponse<TranslationDto>),
        (status = 400, description = "Unsupported language")
    ),
    tag = "i18n"
)]
pub async fn get_translation(
    Path((language, key)): Path<(String, String)>,
) -> Result<Json<ApiResponse<TranslationDto>>> {
    let language = parse_language(&language)?;
    let text = translate(&key, language).to_string();

    Ok(Json(ApiResponse::success(
        Some(TranslationDto {
            key,
            language,
            text,
        }),
        None,
        None,
    )))
}

/// Set the display language of the current session
#[utoipa::path(
    put,
    path = "/api/preferences/language",
    request_body = LanguagePreferenceDto,
    responses(
        (status = 200, description = "Language updated", body = ApiResponse<Language>),
        (status = 400, description = "Unsupported language"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "i18n",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_language(
    user: AuthenticatedUser,
    State(sessions): State<Arc<SessionService>>,
    AppJson(dto): AppJson<LanguagePreferenceDto>,
) -> Result<Json<ApiResponse<Language>>> {
    dto.validate()?;
    let language = parse_language(&dto.language)?;

    sessions.set_language(&user, language).await?;
    Ok(Json(ApiResponse::success(Some(language), None, None)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::features::auth::dtos::LoginRequestDto;
    use crate::features::auth::model::UserRole;
    use crate::features::auth::SessionService;
    use crate::features::i18n::models::Language;
    use crate::features::i18n::routes;
    use crate::shared::test_helpers::with_auth;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_get_tamil_dictionary() {
        let server = TestServer::new(routes::public_routes()).unwrap();

        let response = server.get("/api/i18n/ta").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["language"], "ta");
        assert_eq!(body["data"]["entries"]["nav.home"], "முகப்பு");
    }

    #[tokio::test]
    async fn test_unsupported_language() {
        let server = TestServer::new(routes::public_routes()).unwrap();

        let response = server.get("/api/i18n/fr").expect_failure().await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_single_key_lookup() {
        let server = TestServer::new(routes::public_routes()).unwrap();

        let found: Value = server.get("/api/i18n/en/auth.login").await.json();
        assert_eq!(found["data"]["text"], "Login");

        let missing: Value = server.get("/api/i18n/en/auth.missing").await.json();
        assert_eq!(missing["data"]["text"], "auth.missing");
    }

    #[tokio::test]
    async fn test_update_language_for_session() {
        let sessions = Arc::new(SessionService::new());
        let auth = sessions
            .login(LoginRequestDto {
                email: "meena@example.com".to_string(),
                password: "secret".to_string(),
                role: UserRole::Citizen,
            })
            .await
            .unwrap();
        let user = sessions.authenticate(&auth.access_token).await.unwrap();

        let server = TestServer::new(with_auth(
            routes::protected_routes(sessions.clone()),
            user.clone(),
        ))
        .unwrap();

        let response = server
            .put("/api/preferences/language")
            .json(&json!({ "language": "ta" }))
            .await;
        response.assert_status_ok();
        assert_eq!(
            sessions.current(&user).await.unwrap().language,
            Language::Ta
        );

        let rejected = server
            .put("/api/preferences/language")
            .json(&json!({ "language": "fr" }))
            .expect_failure()
            .await;
        rejected.assert_status_bad_request();
    }
}
