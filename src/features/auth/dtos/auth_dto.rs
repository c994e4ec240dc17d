use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::auth::model::{User, UserRole};
use crate::features::i18n::models::Language;

/// Request DTO for demo login. Any well-formed email/password pair is accepted.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    /// Which login tab was used (citizen or responder)
    #[serde(default = "default_role")]
    pub role: UserRole,
}

fn default_role() -> UserRole {
    UserRole::Citizen
}

/// Request DTO for citizen signup
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignupRequestDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response DTO for login and signup
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    /// Opaque session token, valid until logout or restart
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    pub user: User,
    pub language: Language,
}

/// Response DTO for /api/auth/me
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeResponseDto {
    pub user: User,
    pub language: Language,
    pub signed_in_at: DateTime<Utc>,
}
