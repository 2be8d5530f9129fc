//! Field rules shared by the resource types.
use std::collections::HashSet;

use uuid::Uuid;
use validator::ValidationError;

/// Non-empty after trimming.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// A finite price of zero or more.
pub fn non_negative(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("must be a non-negative number".into());
        return Err(err);
    }
    Ok(())
}

/// An optional leading `+`, then 8 to 15 digits. Spaces and dashes are ignored.
pub fn valid_phone_number(value: &str) -> Result<(), ValidationError> {
    let compact: String = value.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    let ok = (8..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit());
    if !ok {
        let mut err = ValidationError::new("phone_number");
        err.message = Some("must be a phone number of 8 to 15 digits".into());
        return Err(err);
    }
    Ok(())
}

/// No id appears twice.
pub fn unique_ids(ids: &[Uuid]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(ids.len());
    if ids.iter().all(|id| seen.insert(id)) {
        Ok(())
    } else {
        Err(ValidationError::new("unique"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_rejected() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
        assert!(not_blank(" Volvo ").is_ok());
    }

    #[test]
    fn prices_must_be_non_negative() {
        assert!(non_negative(0.0).is_ok());
        assert!(non_negative(499_000.0).is_ok());
        assert!(non_negative(-1.0).is_err());
        assert!(non_negative(f64::NAN).is_err());
    }

    #[test]
    fn phone_numbers() {
        assert!(valid_phone_number("+47 123 45 678").is_ok());
        assert!(valid_phone_number("12345678").is_ok());
        assert!(valid_phone_number("1234").is_err());
        assert!(valid_phone_number("12a45678").is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let a = Uuid::new_v4();
        assert!(unique_ids(&[a, Uuid::new_v4()]).is_ok());
        assert!(unique_ids(&[a, a]).is_err());
        assert!(unique_ids(&[]).is_ok());
    }
}
