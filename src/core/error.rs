use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::HtmlEscape;
use thiserror::Error;

use crate::shared::constants::GENERIC_ERROR_HEADING;
use crate::shared::templates::TemplateError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
            AppError::Template(ref e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
            AppError::Validation(ref msg)
            | AppError::InvalidDate(ref msg)
            | AppError::BadRequest(ref msg) => {
                tracing::warn!("Rejected submission: {}", msg);
                (StatusCode::BAD_REQUEST, Some(msg.clone()))
            }
        };

        (status, Html(error_page(status, detail.as_deref()))).into_response()
    }
}

/// Render a self-contained error page.
///
/// Does not go through the template engine, since a failing engine is one of
/// the reasons to end up here.
fn error_page(status: StatusCode, detail: Option<&str>) -> String {
    let heading = if status.is_server_error() {
        GENERIC_ERROR_HEADING
    } else {
        "The submission could not be accepted"
    };
    let detail = detail
        .map(|d| format!("<p>{}</p>", HtmlEscape(d)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{heading}</title></head>\
         <body><h1 style=\"color:red\">{heading}</h1>{detail}</body></html>"
    )
}

pub type Result<T> = std::result::Result<T, AppError>;
