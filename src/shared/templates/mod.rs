//! HTML template rendering.
//!
//! Pages use Jinja2 syntax and live in `templates/`; see [`engine`] for how
//! embedded templates and on-disk overrides are combined.

pub mod engine;

pub use engine::{TemplateEngine, TemplateError};
