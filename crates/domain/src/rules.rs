//! Shared field validation rules.
//!
//! Each rule takes the reported field name plus a reference to the value and
//! returns the violated constraint as a [`FieldError`]. The functions are
//! referenced by name from `#[validate(custom = "...")]` attributes on the
//! layer structs.

use regdesk_shared::{FieldError, ValidationError};

/// Email fields only require a literal `@` somewhere in the value.
pub fn email(field: &'static str, value: &str) -> Result<(), FieldError> {
    if !value.contains('@') {
        return Err(FieldError::invalid(field, "value must contain '@'"));
    }
    Ok(())
}

/// Exactly eight ASCII digits (RSSB numbers).
pub fn eight_digits(field: &'static str, value: &str) -> Result<(), FieldError> {
    digit_string(field, value, 8)
}

/// Exactly nine ASCII digits (taxpayer and supplier TINs).
pub fn nine_digits(field: &'static str, value: &str) -> Result<(), FieldError> {
    digit_string(field, value, 9)
}

/// Exactly ten ASCII digits (phone and contact numbers).
pub fn ten_digits(field: &'static str, value: &str) -> Result<(), FieldError> {
    digit_string(field, value, 10)
}

/// Exactly three ASCII uppercase letters (airport codes).
pub fn three_uppercase_letters(field: &'static str, value: &str) -> Result<(), FieldError> {
    let valid =
        value.chars().count() == 3 && value.chars().all(|character| character.is_ascii_uppercase());
    if !valid {
        return Err(FieldError::invalid(
            field,
            "value must be 3 uppercase letters",
        ));
    }
    Ok(())
}

/// Two to four ASCII letters of either case (airline codes).
pub fn two_to_four_letters(field: &'static str, value: &str) -> Result<(), FieldError> {
    let length = value.chars().count();
    let valid = (2..=4).contains(&length)
        && value
            .chars()
            .all(|character| character.is_ascii_alphabetic());
    if !valid {
        return Err(FieldError::invalid(field, "value must be 2-4 letters"));
    }
    Ok(())
}

/// ASCII alphanumeric with at least three characters (category and
/// department codes).
pub fn alphanumeric_code(field: &'static str, value: &str) -> Result<(), FieldError> {
    let valid = value.chars().count() >= 3
        && value
            .chars()
            .all(|character| character.is_ascii_alphanumeric());
    if !valid {
        return Err(FieldError::invalid(
            field,
            "value must be alphanumeric with at least 3 characters",
        ));
    }
    Ok(())
}

/// At least three characters, any content (loose code fields).
pub fn min_length_3(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.chars().count() < 3 {
        return Err(FieldError::invalid(
            field,
            "value must be at least 3 characters",
        ));
    }
    Ok(())
}

/// Strictly positive amount. NaN compares false and passes.
pub fn positive_amount(field: &'static str, value: &f64) -> Result<(), FieldError> {
    if *value <= 0.0 {
        return Err(FieldError::invalid(field, "value must be positive"));
    }
    Ok(())
}

/// Non-negative amount. Same NaN caveat as [`positive_amount`].
pub fn non_negative_amount(field: &'static str, value: &f64) -> Result<(), FieldError> {
    if *value < 0.0 {
        return Err(FieldError::invalid(field, "value must not be negative"));
    }
    Ok(())
}

fn digit_string(field: &'static str, value: &str, expected: usize) -> Result<(), FieldError> {
    let valid = value.chars().count() == expected
        && value.chars().all(|character| character.is_ascii_digit());
    if !valid {
        return Err(FieldError::new(
            field,
            format!("value must be exactly {expected} digits"),
        ));
    }
    Ok(())
}
