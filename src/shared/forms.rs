//! Renderer-agnostic description of server-rendered forms and result pages.
//!
//! Features describe *what* to show with these types; a [`FormRenderer`]
//! decides how it turns into markup.

use serde::Serialize;

use crate::shared::templates::TemplateError;

/// Widget kind of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Phone,
    Select,
    Date,
}

/// One entry of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    pub id: &'static str,
    pub kind: FieldKind,
    pub label: String,
    pub mandatory: bool,
    pub options: Vec<SelectOption>,
}

impl FieldDescriptor {
    pub fn new(id: &'static str, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            mandatory: false,
            options: Vec::new(),
        }
    }

    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub fn with_option(mut self, value: impl ToString, text: impl Into<String>) -> Self {
        self.options.push(SelectOption {
            value: value.to_string(),
            text: text.into(),
        });
        self
    }
}

/// Complete form: ordered fields plus submit button
#[derive(Debug, Clone, Serialize)]
pub struct FormDescriptor {
    pub title: String,
    pub fields: Vec<FieldDescriptor>,
    pub submit_label: String,
    /// Client-side companion script, referenced from the rendered page
    pub client_script: Option<String>,
}

impl FormDescriptor {
    pub fn new(title: impl Into<String>, submit_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            submit_label: submit_label.into(),
            client_script: None,
        }
    }

    pub fn add_field(&mut self, field: FieldDescriptor) -> &mut Self {
        self.fields.push(field);
        self
    }

    #[cfg(test)]
    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeTone {
    Success,
    Error,
}

/// Result page shown after a submission
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub tone: NoticeTone,
    pub heading: String,
    /// Identifier highlighted next to the heading
    pub record_id: Option<String>,
    pub detail: Option<String>,
}

/// Turns form and notice descriptions into HTML
pub trait FormRenderer: Send + Sync {
    fn render_form(&self, form: &FormDescriptor) -> Result<String, TemplateError>;

    fn render_notice(&self, notice: &Notice) -> Result<String, TemplateError>;
}
