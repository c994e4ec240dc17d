//! Text templates rendered with Jinja syntax.
//!
//! Templates live under `templates/` at the crate root and are compiled into
//! the binary, so rendering never touches the filesystem.

pub mod engine;

pub use engine::{render_template, TemplateError};

/// Template used for the responder dispatch message
pub const DISPATCH_ALERT_TEMPLATE: &str = "dispatch/alert.txt";
