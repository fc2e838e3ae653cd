//! Template engine for the HTML pages served by the intake form.
//!
//! Templates ship embedded in the binary. `.jinja` files found under the
//! configured template directory replace embedded ones with the same
//! relative name, so markup can be restyled without a rebuild.

use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

use crate::shared::forms::{FormDescriptor, FormRenderer, Notice};

pub const LAYOUT_TEMPLATE: &str = "layout.html.jinja";
pub const FORM_TEMPLATE: &str = "intake/form.html.jinja";
pub const NOTICE_TEMPLATE: &str = "intake/notice.html.jinja";

const EMBEDDED_TEMPLATES: &[(&str, &str)] = &[
    (
        LAYOUT_TEMPLATE,
        include_str!("../../../templates/layout.html.jinja"),
    ),
    (
        FORM_TEMPLATE,
        include_str!("../../../templates/intake/form.html.jinja"),
    ),
    (
        NOTICE_TEMPLATE,
        include_str!("../../../templates/intake/notice.html.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

/// minijinja-backed [`FormRenderer`]
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.env.templates().count())
            .finish()
    }
}

impl TemplateEngine {
    /// Build the engine from the embedded templates, then apply overrides
    /// from `template_dir` if it exists.
    pub fn new(template_dir: &Path) -> Result<Self, TemplateError> {
        let mut engine = Self::embedded()?;

        if template_dir.exists() {
            load_templates_recursive(&mut engine.env, template_dir, template_dir);
        } else {
            tracing::debug!(
                "Template directory {} not found, using embedded templates",
                template_dir.display()
            );
        }

        Ok(engine)
    }

    /// Engine with only the templates compiled into the binary
    pub fn embedded() -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        // Every page is HTML, whatever the file suffix
        env.set_auto_escape_callback(|_| AutoEscape::Html);

        for &(name, source) in EMBEDDED_TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| TemplateError::RenderError(e.to_string()))?;
        }

        Ok(Self { env })
    }

    /// Render a template with the given context.
    pub fn render<S: Serialize>(&self, template_name: &str, ctx: S) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(template_name)
            .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

        template
            .render(ctx)
            .map_err(|e| TemplateError::RenderError(e.to_string()))
    }

    /// Check if a template exists
    #[cfg(test)]
    pub fn template_exists(&self, template_name: &str) -> bool {
        self.env.get_template(template_name).is_ok()
    }
}

impl FormRenderer for TemplateEngine {
    fn render_form(&self, form: &FormDescriptor) -> Result<String, TemplateError> {
        self.render(FORM_TEMPLATE, context! { form })
    }

    fn render_notice(&self, notice: &Notice) -> Result<String, TemplateError> {
        self.render(NOTICE_TEMPLATE, context! { notice })
    }
}

/// Recursively load all .jinja templates from a directory
fn load_templates_recursive(env: &mut Environment<'static>, base_path: &Path, current_path: &Path) {
    if let Ok(entries) = std::fs::read_dir(current_path) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                load_templates_recursive(env, base_path, &path);
            } else if path.extension().is_some_and(|ext| ext == "jinja") {
                // Create template name from relative path
                if let Ok(relative) = path.strip_prefix(base_path) {
                    let template_name = relative.to_string_lossy().replace('\\', "/");
                    if let Ok(content) = std::fs::read_to_string(&path) {
                        // Leaked once at startup; templates live as long as the process
                        let static_name: &'static str =
                            Box::leak(template_name.clone().into_boxed_str());
                        let static_content: &'static str = Box::leak(content.into_boxed_str());
                        if let Err(e) = env.add_template(static_name, static_content) {
                            tracing::warn!("Failed to load template {}: {}", template_name, e);
                        } else {
                            tracing::debug!("Loaded template: {}", template_name);
                        }
                    }
                }
            }
        }
    }
}
