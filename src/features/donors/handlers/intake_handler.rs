use std::sync::Arc;

use axum::{extract::State, response::Html};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppForm;
use crate::features::donors::dtos::DonorSubmissionDto;
use crate::features::donors::services::DonorIntakeService;

/// Show the empty blood donor intake form
pub async fn show_form(State(service): State<Arc<DonorIntakeService>>) -> Result<Html<String>> {
    let html = service.render_form()?;
    Ok(Html(html))
}

/// Accept an intake form submission
///
/// Future dates and duplicates are answered with a notice page; nothing is
/// stored in either case.
pub async fn submit_form(
    State(service): State<Arc<DonorIntakeService>>,
    AppForm(dto): AppForm<DonorSubmissionDto>,
) -> Result<Html<String>> {
    let dto = dto.normalized();
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let outcome = service.submit(dto).await?;
    let html = service.render_outcome(&outcome)?;
    Ok(Html(html))
}
