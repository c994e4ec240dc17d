use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::i18n::models::Language;

/// Request DTO for switching the display language
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LanguagePreferenceDto {
    /// "en" or "ta"
    #[validate(length(min = 1, message = "Language is required"))]
    pub language: String,
}

/// All UI strings for one language
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TranslationsDto {
    pub language: Language,
    pub entries: BTreeMap<String, String>,
}

/// A single looked-up UI string
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TranslationDto {
    pub key: String,
    pub language: Language,
    pub text: String,
}
