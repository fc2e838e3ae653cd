use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::error::AppError;

/// Gender as offered on the intake form, stored by code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male = 1,
    Female = 2,
    Custom = 3,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Custom];

    pub fn code(self) -> i16 {
        self as i16
    }

    pub fn from_code(code: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Custom => "Custom",
        }
    }
}

/// ABO/Rh blood group, stored by code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloodGroup {
    APositive = 1,
    ANegative = 2,
    BPositive = 3,
    BNegative = 4,
    AbPositive = 5,
    AbNegative = 6,
    OPositive = 7,
    ONegative = 8,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    pub fn code(self) -> i16 {
        self as i16
    }

    pub fn from_code(code: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

/// Validated donor attributes, before an id is assigned.
///
/// The six attributes together form the uniqueness key of a donor record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonor {
    pub first_name: String,
    pub last_name: Option<String>,
    pub gender: Gender,
    pub phone_number: String,
    pub blood_group: BloodGroup,
    pub last_donation_date: NaiveDate,
}

impl NewDonor {
    /// Exact match on every key attribute; dates compare by calendar day
    #[cfg(test)]
    pub fn same_key_as(&self, donor: &Donor) -> bool {
        self.first_name == donor.first_name
            && self.last_name == donor.last_name
            && self.gender == donor.gender
            && self.phone_number == donor.phone_number
            && self.blood_group == donor.blood_group
            && self.last_donation_date == donor.last_donation_date
    }
}

/// Persisted donor record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub gender: Gender,
    pub phone_number: String,
    pub blood_group: BloodGroup,
    pub last_donation_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Donor {
    #[cfg(test)]
    pub fn from_new(id: Uuid, donor: NewDonor, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: donor.first_name,
            last_name: donor.last_name,
            gender: donor.gender,
            phone_number: donor.phone_number,
            blood_group: donor.blood_group,
            last_donation_date: donor.last_donation_date,
            created_at,
        }
    }
}

/// Database model for blood donor
#[derive(Debug, Clone, FromRow)]
pub struct DonorRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub gender: i16,
    pub phone_number: String,
    pub blood_group: i16,
    pub last_donation_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DonorRow> for Donor {
    type Error = AppError;

    fn try_from(row: DonorRow) -> Result<Self, Self::Error> {
        let gender = Gender::from_code(row.gender).ok_or_else(|| {
            AppError::Internal(format!("Donor {} has unknown gender code {}", row.id, row.gender))
        })?;
        let blood_group = BloodGroup::from_code(row.blood_group).ok_or_else(|| {
            AppError::Internal(format!(
                "Donor {} has unknown blood group code {}",
                row.id, row.blood_group
            ))
        })?;

        Ok(Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            gender,
            phone_number: row.phone_number,
            blood_group,
            last_donation_date: row.last_donation_date,
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::from_code(1), Some(Gender::Male));
        assert_eq!(Gender::from_code(2), Some(Gender::Female));
        assert_eq!(Gender::from_code(3), Some(Gender::Custom));
        assert_eq!(Gender::from_code(0), None);
        assert_eq!(Gender::from_code(4), None);
    }

    #[test]
    fn test_blood_group_codes() {
        let labels: Vec<&str> = (1..=8)
            .map(|code| BloodGroup::from_code(code).expect("known code").label())
            .collect();
        assert_eq!(labels, ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"]);
        assert_eq!(BloodGroup::from_code(0), None);
        assert_eq!(BloodGroup::from_code(9), None);
        assert_eq!(BloodGroup::OPositive.code(), 7);
    }

    #[test]
    fn test_row_with_unknown_code_is_rejected() {
        let row = DonorRow {
            id: Uuid::now_v7(),
            first_name: "Asha".to_string(),
            last_name: None,
            gender: 9,
            phone_number: "9999999999".to_string(),
            blood_group: 7,
            last_donation_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            created_at: Utc::now(),
        };

        assert!(matches!(Donor::try_from(row), Err(AppError::Internal(_))));
    }
}
