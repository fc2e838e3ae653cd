use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::donors::models::{Donor, DonorRow, NewDonor};

/// Result of an insert that honours the donor uniqueness key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(Donor),
    /// A record with the same key was committed first
    AlreadyExists,
}

/// Storage abstraction for donor records
#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// Ids of records matching every key attribute of `donor`
    async fn find_matching(&self, donor: &NewDonor) -> Result<Vec<Uuid>>;

    /// Insert `donor`, reporting [`CreateOutcome::AlreadyExists`] instead of
    /// failing when the uniqueness key is taken
    async fn create(&self, donor: NewDonor) -> Result<CreateOutcome>;
}

/// PostgreSQL-backed donor repository
pub struct PgDonorRepository {
    pool: PgPool,
}

impl PgDonorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonorRepository for PgDonorRepository {
    async fn find_matching(&self, donor: &NewDonor) -> Result<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id
            FROM blood_donors
            WHERE blood_group = $1
              AND gender = $2
              AND first_name = $3
              AND last_name IS NOT DISTINCT FROM $4
              AND phone_number = $5
              AND last_donation_date = $6
            ORDER BY created_at
            "#,
        )
        .bind(donor.blood_group.code())
        .bind(donor.gender.code())
        .bind(&donor.first_name)
        .bind(&donor.last_name)
        .bind(&donor.phone_number)
        .bind(donor.last_donation_date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search blood donors: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn create(&self, donor: NewDonor) -> Result<CreateOutcome> {
        let row = sqlx::query_as::<_, DonorRow>(
            r#"
            INSERT INTO blood_donors (
                id, first_name, last_name, gender, phone_number, blood_group, last_donation_date, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (
                first_name, (COALESCE(last_name, '')), gender, phone_number, blood_group, last_donation_date
            ) DO NOTHING
            RETURNING id, first_name, last_name, gender, phone_number, blood_group, last_donation_date, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&donor.first_name)
        .bind(&donor.last_name)
        .bind(donor.gender.code())
        .bind(&donor.phone_number)
        .bind(donor.blood_group.code())
        .bind(donor.last_donation_date)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert blood donor: {:?}", e);
            AppError::Database(e)
        })?;

        match row {
            Some(row) => Ok(CreateOutcome::Created(Donor::try_from(row)?)),
            None => Ok(CreateOutcome::AlreadyExists),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::features::donors::models::{BloodGroup, Gender};

    fn donor(last_name: Option<&str>) -> NewDonor {
        NewDonor {
            first_name: "Asha".to_string(),
            last_name: last_name.map(str::to_string),
            gender: Gender::Female,
            phone_number: "(555) 010-2030".to_string(),
            blood_group: BloodGroup::OPositive,
            last_donation_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_find_matching_treats_missing_last_names_as_equal(pool: PgPool) {
        let repository = PgDonorRepository::new(pool);

        let CreateOutcome::Created(created) = repository.create(donor(None)).await.expect("insert")
        else {
            panic!("first insert should create a record");
        };

        let matches = repository.find_matching(&donor(None)).await.expect("search");
        assert_eq!(matches, vec![created.id]);
        assert_eq!(created.last_name, None);

        let other = repository
            .find_matching(&donor(Some("Rao")))
            .await
            .expect("search");
        assert!(other.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_conflicting_insert_reports_already_exists(pool: PgPool) {
        let repository = PgDonorRepository::new(pool.clone());

        assert!(matches!(
            repository.create(donor(None)).await.expect("insert"),
            CreateOutcome::Created(_)
        ));
        assert_eq!(
            repository.create(donor(None)).await.expect("insert"),
            CreateOutcome::AlreadyExists
        );
        assert!(matches!(
            repository.create(donor(Some("Rao"))).await.expect("insert"),
            CreateOutcome::Created(_)
        ));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blood_donors")
            .fetch_one(&pool)
            .await
            .expect("count");
        assert_eq!(count, 2);
    }
}
