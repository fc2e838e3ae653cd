use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::config::FormConfig;
use crate::core::error::{AppError, Result};
use crate::features::donors::dtos::DonorSubmissionDto;
use crate::features::donors::forms::intake_form;
use crate::features::donors::models::Donor;
use crate::features::donors::repositories::{CreateOutcome, DonorRepository};
use crate::shared::clock::Clock;
use crate::shared::constants::{
    CREATED_DETAIL, CREATED_HEADING, DUPLICATE_DETAIL, DUPLICATE_HEADING, FUTURE_DATE_HEADING,
};
use crate::shared::forms::{FormRenderer, Notice, NoticeTone};

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// A new record was stored
    Created(Donor),
    /// The last donation date lies after today; nothing stored
    FutureDate {
        submitted: NaiveDate,
        today: NaiveDate,
    },
    /// A record with the same key already exists; nothing stored.
    /// `existing` is unknown when the conflict surfaced on insert.
    Duplicate { existing: Option<Uuid> },
}

impl IntakeOutcome {
    /// User-facing result page for this outcome
    pub fn notice(&self) -> Notice {
        match self {
            IntakeOutcome::Created(donor) => Notice {
                tone: NoticeTone::Success,
                heading: CREATED_HEADING.to_string(),
                record_id: Some(donor.id.to_string()),
                detail: Some(CREATED_DETAIL.to_string()),
            },
            IntakeOutcome::FutureDate { submitted, today } => Notice {
                tone: NoticeTone::Error,
                heading: FUTURE_DATE_HEADING.to_string(),
                record_id: None,
                detail: Some(format!(
                    "{} is after today ({}).",
                    submitted.format("%Y-%m-%d"),
                    today.format("%Y-%m-%d")
                )),
            },
            IntakeOutcome::Duplicate { .. } => Notice {
                tone: NoticeTone::Error,
                heading: DUPLICATE_HEADING.to_string(),
                record_id: None,
                detail: Some(DUPLICATE_DETAIL.to_string()),
            },
        }
    }
}

/// Donor intake: renders the form and turns submissions into records
pub struct DonorIntakeService {
    repository: Arc<dyn DonorRepository>,
    renderer: Arc<dyn FormRenderer>,
    clock: Arc<dyn Clock>,
    form: FormConfig,
}

impl DonorIntakeService {
    pub fn new(
        repository: Arc<dyn DonorRepository>,
        renderer: Arc<dyn FormRenderer>,
        clock: Arc<dyn Clock>,
        form: FormConfig,
    ) -> Self {
        Self {
            repository,
            renderer,
            clock,
            form,
        }
    }

    /// Render the empty intake form
    pub fn render_form(&self) -> Result<String> {
        let form = intake_form(&self.form);
        self.renderer.render_form(&form).map_err(|e| {
            tracing::error!("Error creating form: {}", e);
            AppError::Template(e)
        })
    }

    /// Render the result page for a finished submission
    pub fn render_outcome(&self, outcome: &IntakeOutcome) -> Result<String> {
        self.renderer.render_notice(&outcome.notice()).map_err(|e| {
            tracing::error!("Error rendering submission result: {}", e);
            AppError::Template(e)
        })
    }

    /// Parse a submitted donation date with the configured format
    pub fn parse_donation_date(&self, raw: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(raw, &self.form.date_format).map_err(|e| {
            tracing::warn!("Unparseable last donation date {:?}: {}", raw, e);
            AppError::InvalidDate(format!(
                "Last donation date '{}' does not match the expected format {}",
                raw, self.form.date_format
            ))
        })
    }

    /// Process a validated submission.
    ///
    /// Parses the date, refuses future dates, refuses exact duplicates and
    /// otherwise stores a new record. Nothing is stored on any rejection.
    pub async fn submit(&self, dto: DonorSubmissionDto) -> Result<IntakeOutcome> {
        let submitted = self.parse_donation_date(&dto.last_donation_date)?;

        let today = self.clock.today();
        if submitted > today {
            tracing::info!(
                "Rejected future last donation date: submitted={}, today={}",
                submitted,
                today
            );
            return Ok(IntakeOutcome::FutureDate { submitted, today });
        }

        let donor = dto.into_new_donor(submitted)?;

        let matches = self.repository.find_matching(&donor).await?;
        if let Some(existing) = matches.first() {
            tracing::info!(
                "Blood donor already registered: existing_id={}, matches={}",
                existing,
                matches.len()
            );
            return Ok(IntakeOutcome::Duplicate {
                existing: Some(*existing),
            });
        }

        match self.repository.create(donor).await? {
            CreateOutcome::Created(donor) => {
                tracing::info!(
                    "Blood donor created: id={}, blood_group={}",
                    donor.id,
                    donor.blood_group.label()
                );
                Ok(IntakeOutcome::Created(donor))
            }
            CreateOutcome::AlreadyExists => {
                tracing::warn!("Blood donor inserted concurrently by another submission");
                Ok(IntakeOutcome::Duplicate { existing: None })
            }
        }
    }
}
