mod i18n_dto;

pub use i18n_dto::{LanguagePreferenceDto, TranslationDto, TranslationsDto};
