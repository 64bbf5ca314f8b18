//! Field-level validation for the create/edit forms.
//!
//! Checks run in form order and stop at the first failure; the `Display` text
//! of [`FieldError`] is exactly what the blocking alert shows.

use thiserror::Error;

pub const CONTACT_NO_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required!")]
    Required(&'static str),

    #[error("Contact No must be a valid 10-digit number!")]
    InvalidContactNo,

    #[error("Email must be a valid email address!")]
    InvalidEmail,

    #[error("Age must be a valid positive number!")]
    InvalidAge,
}

impl FieldError {
    /// Label of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Required(label) => label,
            FieldError::InvalidContactNo => "Contact No",
            FieldError::InvalidEmail => "Email",
            FieldError::InvalidAge => "Age",
        }
    }
}

/// Fails with [`FieldError::Required`] when the value is blank after trimming.
pub fn require(label: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required(label))
    } else {
        Ok(())
    }
}

/// Exactly ten ASCII digits, nothing else (no trimming, no separators).
pub fn is_valid_contact_no(value: &str) -> bool {
    value.len() == CONTACT_NO_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// Basic address shape: somewhere in the input there is a run of
/// non-whitespace characters of the form `local@domain.tld`, each part
/// non-empty. Same acceptance as the unanchored pattern `\S+@\S+\.\S+`.
pub fn is_valid_email(value: &str) -> bool {
    value.split_whitespace().any(token_has_address_shape)
}

fn token_has_address_shape(token: &str) -> bool {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    // '@' needs a char before it; '.' needs at least one char between it and
    // the '@' and at least one after it.
    (1..len).filter(|&at| chars[at] == '@').any(|at| {
        (at + 2..len.saturating_sub(1)).any(|dot| chars[dot] == '.')
    })
}

pub fn validate_contact_no(value: &str) -> Result<(), FieldError> {
    require("Contact No", value)?;
    if !is_valid_contact_no(value) {
        return Err(FieldError::InvalidContactNo);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    require("Email", value)?;
    if !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Parses a positive whole age from form input.
pub fn parse_age(value: &str) -> Result<u32, FieldError> {
    require("Age", value)?;
    match value.trim().parse::<u32>() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(FieldError::InvalidAge),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_no_accepts_ten_digits() {
        assert!(is_valid_contact_no("0771234567"));
        assert_eq!(validate_contact_no("0771234567"), Ok(()));
    }

    #[test]
    fn test_contact_no_rejects_other_shapes() {
        for input in ["12345", "07712345678", "077 123 4567", "077123456a", " 0771234567", "٠١٢٣٤٥٦٧٨٩"] {
            let err = validate_contact_no(input).unwrap_err();
            assert_eq!(err.field(), "Contact No", "input {:?}", input);
        }
        assert_eq!(
            validate_contact_no("12345").unwrap_err().to_string(),
            "Contact No must be a valid 10-digit number!"
        );
    }

    #[test]
    fn test_contact_no_blank_is_required_error() {
        assert_eq!(
            validate_contact_no("   ").unwrap_err().to_string(),
            "Contact No is required!"
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("anne@salon.lk"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("contact: anne@salon.lk"));
        assert!(is_valid_email("first.last@mail.co.uk"));

        assert!(!is_valid_email("anne.salon.lk"));
        assert!(!is_valid_email("anne@salon"));
        assert!(!is_valid_email("@salon.lk"));
        assert!(!is_valid_email("anne@.lk"));
        assert!(!is_valid_email("anne@salon."));
        assert!(!is_valid_email("anne @salon.lk"));
    }

    #[test]
    fn test_email_errors_name_the_field() {
        assert_eq!(validate_email("").unwrap_err(), FieldError::Required("Email"));
        let err = validate_email("anne-at-salon").unwrap_err();
        assert_eq!(err.field(), "Email");
        assert_eq!(err.to_string(), "Email must be a valid email address!");
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age(" 27 "), Ok(27));
        assert_eq!(parse_age(""), Err(FieldError::Required("Age")));
        assert_eq!(parse_age("0"), Err(FieldError::InvalidAge));
        assert_eq!(parse_age("-3"), Err(FieldError::InvalidAge));
        assert_eq!(parse_age("twenty"), Err(FieldError::InvalidAge));
    }
}
