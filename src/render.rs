//! Template rendering shared by both pipelines.

use std::fs;
use std::path::Path;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::error::AppError;

/// Render the template at `template` against `context`.
///
/// The environment is strict: a variable the context does not provide is a
/// render error, not empty output.
pub fn render_template<C: Serialize>(template: &Path, context: &C) -> Result<String, AppError> {
    if !template.is_file() {
        return Err(AppError::TemplateNotFound(template.display().to_string()));
    }
    let source = fs::read_to_string(template)?;

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);

    env.render_str(&source, context).map_err(|err| AppError::TemplateRender {
        template: template.display().to_string(),
        reason: err.to_string(),
    })
}

/// Render `template` and write the result to `out`, overwriting any existing
/// file.
pub fn render_to_file<C: Serialize>(
    template: &Path,
    context: &C,
    out: &Path,
) -> Result<(), AppError> {
    let rendered = render_template(template, context)?;
    fs::write(out, rendered)?;
    Ok(())
}
