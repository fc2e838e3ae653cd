use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::donors::models::{BloodGroup, Gender, NewDonor};
use crate::shared::validation::{validate_not_blank, validate_phone_number};

/// Raw intake form submission (form-encoded)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DonorSubmissionDto {
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 255, message = "First name must not exceed 255 characters")
    )]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Last name must not exceed 255 characters"))]
    pub last_name: Option<String>,

    /// Gender code: 1 Male, 2 Female, 3 Custom
    #[validate(
        required(message = "Gender is required"),
        range(min = 1, max = 3, message = "Gender must be 1 (Male), 2 (Female) or 3 (Custom)")
    )]
    pub gender: Option<i16>,

    #[serde(default)]
    #[validate(
        custom(function = "validate_phone_number"),
        length(max = 40, message = "Phone number must not exceed 40 characters")
    )]
    pub phone_number: String,

    /// Blood group code: 1 A+, 2 A-, 3 B+, 4 B-, 5 AB+, 6 AB-, 7 O+, 8 O-
    #[validate(
        required(message = "Blood group is required"),
        range(min = 1, max = 8, message = "Blood group must be a code between 1 and 8")
    )]
    pub blood_group: Option<i16>,

    /// Unparsed date; parsing happens in the service with the configured format
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub last_donation_date: String,
}

impl DonorSubmissionDto {
    /// Trim surrounding whitespace; an empty last name becomes absent
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self
                .last_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            gender: self.gender,
            phone_number: self.phone_number.trim().to_string(),
            blood_group: self.blood_group,
            last_donation_date: self.last_donation_date.trim().to_string(),
        }
    }

    /// Resolve coded fields and attach the parsed donation date
    pub fn into_new_donor(self, last_donation_date: NaiveDate) -> Result<NewDonor> {
        let gender = self
            .gender
            .and_then(Gender::from_code)
            .ok_or_else(|| AppError::Validation(format!("Unknown gender code {:?}", self.gender)))?;
        let blood_group = self.blood_group.and_then(BloodGroup::from_code).ok_or_else(|| {
            AppError::Validation(format!("Unknown blood group code {:?}", self.blood_group))
        })?;

        Ok(NewDonor {
            first_name: self.first_name,
            last_name: self.last_name,
            gender,
            phone_number: self.phone_number,
            blood_group,
            last_donation_date,
        })
    }
}
