// =============================================================================
// INTAKE FORM FIELD NAMES
// =============================================================================

/// Form field carrying the donor's first name
pub const FIELD_FIRST_NAME: &str = "firstName";

/// Form field carrying the donor's last name
pub const FIELD_LAST_NAME: &str = "lastName";

/// Form field carrying the coded gender
pub const FIELD_GENDER: &str = "gender";

/// Form field carrying the donor's phone number
pub const FIELD_PHONE_NUMBER: &str = "phoneNumber";

/// Form field carrying the coded blood group
pub const FIELD_BLOOD_GROUP: &str = "bloodGroup";

/// Form field carrying the last donation date
pub const FIELD_LAST_DONATION_DATE: &str = "lastDonationDate";

// =============================================================================
// USER-VISIBLE MESSAGES
// =============================================================================

pub const GENERIC_ERROR_HEADING: &str = "Something went wrong";

pub const CREATED_HEADING: &str = "Success! Record has been created with the ID:";

pub const CREATED_DETAIL: &str = "Thank you for your submission.";

pub const DUPLICATE_HEADING: &str = "Record already exists.";

pub const DUPLICATE_DETAIL: &str = "Please try again with different data.";

pub const FUTURE_DATE_HEADING: &str = "The date cannot be a future date!!";
