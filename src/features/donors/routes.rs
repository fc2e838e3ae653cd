use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::donors::handlers;
use crate::features::donors::services::DonorIntakeService;

/// Path serving the intake form (GET) and accepting submissions (POST)
pub const INTAKE_PATH: &str = "/";

/// Create routes for the donor intake feature
///
/// Note: This feature is public (no authentication required); access control,
/// if any, is left to the deployment in front of it.
pub fn routes(service: Arc<DonorIntakeService>) -> Router {
    Router::new()
        .route(
            INTAKE_PATH,
            get(handlers::show_form).post(handlers::submit_form),
        )
        .with_state(service)
}
