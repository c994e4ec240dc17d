pub mod triage_handler;

pub use triage_handler::{__path_list_presets, __path_preview, list_presets, preview};
