//! In-memory collaborators for exercising the intake flow without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::core::config::FormConfig;
use crate::core::error::{AppError, Result};
use crate::features::donors::dtos::DonorSubmissionDto;
use crate::features::donors::models::{Donor, NewDonor};
use crate::features::donors::repositories::{CreateOutcome, DonorRepository};
use crate::features::donors::{routes, DonorIntakeService};
use crate::shared::clock::Clock;
use crate::shared::forms::{FormDescriptor, FormRenderer, Notice};
use crate::shared::templates::{TemplateEngine, TemplateError};

/// Vec-backed repository with the same uniqueness rule as the database
#[derive(Default)]
pub struct InMemoryDonorRepository {
    donors: Mutex<Vec<Donor>>,
}

impl InMemoryDonorRepository {
    pub fn len(&self) -> usize {
        self.donors.lock().map(|d| d.len()).unwrap_or_default()
    }

    pub fn all(&self) -> Vec<Donor> {
        self.donors.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl DonorRepository for InMemoryDonorRepository {
    async fn find_matching(&self, donor: &NewDonor) -> Result<Vec<Uuid>> {
        let donors = self
            .donors
            .lock()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(donors
            .iter()
            .filter(|existing| donor.same_key_as(existing))
            .map(|existing| existing.id)
            .collect())
    }

    async fn create(&self, donor: NewDonor) -> Result<CreateOutcome> {
        let mut donors = self
            .donors
            .lock()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        if donors.iter().any(|existing| donor.same_key_as(existing)) {
            return Ok(CreateOutcome::AlreadyExists);
        }
        let created = Donor::from_new(Uuid::now_v7(), donor, Utc::now());
        donors.push(created.clone());
        Ok(CreateOutcome::Created(created))
    }
}

/// Repository whose search misses every record while inserts still hit the
/// uniqueness rule, as when two submissions race past the search
#[derive(Default)]
pub struct RacingDonorRepository {
    inner: InMemoryDonorRepository,
}

impl RacingDonorRepository {
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl DonorRepository for RacingDonorRepository {
    async fn find_matching(&self, _donor: &NewDonor) -> Result<Vec<Uuid>> {
        Ok(Vec::new())
    }

    async fn create(&self, donor: NewDonor) -> Result<CreateOutcome> {
        self.inner.create(donor).await
    }
}

/// Repository that fails every call, standing in for an unreachable database
pub struct UnavailableDonorRepository;

#[async_trait]
impl DonorRepository for UnavailableDonorRepository {
    async fn find_matching(&self, _donor: &NewDonor) -> Result<Vec<Uuid>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _donor: NewDonor) -> Result<CreateOutcome> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Clock pinned to a single day
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Renderer that fails every call
pub struct FailingRenderer;

impl FormRenderer for FailingRenderer {
    fn render_form(&self, _form: &FormDescriptor) -> std::result::Result<String, TemplateError> {
        Err(TemplateError::RenderError("renderer offline".to_string()))
    }

    fn render_notice(&self, _notice: &Notice) -> std::result::Result<String, TemplateError> {
        Err(TemplateError::RenderError("renderer offline".to_string()))
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// "Today" for every test service
pub fn today() -> NaiveDate {
    date(2024, 6, 15)
}

/// Submission used throughout the tests: Asha Rao, female, O+
pub fn asha_submission() -> DonorSubmissionDto {
    DonorSubmissionDto {
        first_name: "Asha".to_string(),
        last_name: Some("Rao".to_string()),
        gender: Some(2),
        phone_number: "9999999999".to_string(),
        blood_group: Some(7),
        last_donation_date: "2024-01-01".to_string(),
    }
}

pub fn build_service(repository: Arc<dyn DonorRepository>) -> Arc<DonorIntakeService> {
    let renderer = Arc::new(TemplateEngine::embedded().expect("embedded templates compile"));
    build_service_with_renderer(repository, renderer)
}

pub fn build_service_with_renderer(
    repository: Arc<dyn DonorRepository>,
    renderer: Arc<dyn FormRenderer>,
) -> Arc<DonorIntakeService> {
    Arc::new(DonorIntakeService::new(
        repository,
        renderer,
        Arc::new(FixedClock(today())),
        FormConfig::default(),
    ))
}

pub fn test_router(repository: Arc<dyn DonorRepository>) -> Router {
    routes::routes(build_service(repository))
}
