use minijinja::{AutoEscape, Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Built-in templates: (name, source)
const TEMPLATES: &[(&str, &str)] = &[(
    super::DISPATCH_ALERT_TEMPLATE,
    include_str!("../../../templates/dispatch/alert.txt.jinja"),
)];

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    // Plain-text output: descriptions are quoted verbatim
    env.set_auto_escape_callback(|_| AutoEscape::None);

    for (name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a built-in template with the given context.
///
/// # Example
/// ```ignore
/// let ctx = minijinja::context! { severity => "LOW", victims => 0 };
/// let text = render_template(DISPATCH_ALERT_TEMPLATE, ctx)?;
/// ```
pub fn render_template(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}
