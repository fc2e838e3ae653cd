use axum::{
    body::Body,
    extract::{rejection::FormRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Form,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom form extractor that renders rejections as HTML error pages
pub struct AppForm<T>(pub T);

impl<T, S> FromRequest<S> for AppForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppFormRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppFormRejection(rejection)),
        }
    }
}

pub struct AppFormRejection(FormRejection);

impl IntoResponse for AppFormRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            FormRejection::FailedToDeserializeFormBody(err) => {
                format!("Invalid form data: {}", err.body_text())
            }
            FormRejection::FailedToDeserializeForm(err) => {
                format!("Invalid form data: {}", err.body_text())
            }
            FormRejection::InvalidFormContentType(_) => {
                "Expected a form-encoded submission".to_string()
            }
            _ => "Failed to read form submission".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}
