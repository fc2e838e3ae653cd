use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

/// Minimum number of digits in an accepted phone number
pub const PHONE_MIN_DIGITS: usize = 7;

/// Maximum number of digits in an accepted phone number
pub const PHONE_MAX_DIGITS: usize = 20;

lazy_static! {
    /// Regex for the characters allowed in a phone number
    /// Optional leading `+`, then digits with spaces, dots, hyphens or parentheses
    /// - Valid: "9999999999", "+91 99999 99999", "(555) 010-2030", "555.010.2030"
    /// - Invalid: "call me", "99-99x", "++91999", ""
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9(][0-9 ().\-]*$").unwrap();
}

/// `validator` hook for phone number fields
pub fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(char::is_ascii_digit).count();

    if !PHONE_REGEX.is_match(value) {
        return Err(ValidationError::new("phone_format")
            .with_message("Phone number may only contain digits, spaces and + ( ) . -".into()));
    }
    if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
        return Err(ValidationError::new("phone_length")
            .with_message("Phone number must contain between 7 and 20 digits".into()));
    }
    Ok(())
}

/// `validator` hook rejecting strings that are empty once trimmed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Value must not be blank".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("9999999999"));
        assert!(PHONE_REGEX.is_match("+91 99999 99999"));
        assert!(PHONE_REGEX.is_match("(555) 010-2030"));
        assert!(PHONE_REGEX.is_match("555.010.2030"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("call me")); // letters
        assert!(!PHONE_REGEX.is_match("99-99x")); // trailing letter
        assert!(!PHONE_REGEX.is_match("++91999")); // double plus
        assert!(!PHONE_REGEX.is_match("")); // empty
        assert!(!PHONE_REGEX.is_match("-9999999")); // starts with hyphen
        assert!(!PHONE_REGEX.is_match(" 9999999")); // starts with space
    }

    #[test]
    fn test_validate_phone_number_digit_count() {
        assert!(validate_phone_number("9999999999").is_ok());
        assert!(validate_phone_number("1234567").is_ok());
        assert!(validate_phone_number("123456").is_err()); // too short
        assert!(validate_phone_number("123456789012345678901").is_err()); // too long
        assert!(validate_phone_number("(1) 2-3").is_err());
        assert!(validate_phone_number("(555) 010-2030").is_ok());
        assert!(validate_phone_number("+(91) 99999-99999").is_ok());
        assert!(validate_phone_number("(((((((").is_err()); // no digits
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Asha").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }
}
