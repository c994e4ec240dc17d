pub mod i18n_handler;

pub use i18n_handler::{
    __path_get_translation, __path_get_translations, __path_update_language, get_translation,
    get_translations, update_language,
};
