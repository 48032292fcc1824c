//! Field rules with more than one possible message.
//!
//! `validator` reports every failing attribute on a field; these functions
//! fold an ordered list of checks into one rule so the field gets only the
//! message of the first check that fails.

use std::borrow::Cow;
use validator::{ValidateEmail, ValidateUrl, ValidationError};

fn fail(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// 3 to 20 characters of letters, digits and underscores.
pub fn username(value: &str) -> Result<(), ValidationError> {
    let len = char_count(value);
    if len < 3 {
        return Err(fail("length", "Username must be at least 3 characters"));
    }
    if len > 20 {
        return Err(fail("length", "Username must be less than 20 characters"));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(fail(
            "charset",
            "Username can only contain letters, numbers, and underscores",
        ));
    }
    Ok(())
}

/// At least 8 characters with an uppercase letter, a lowercase letter and a digit.
pub fn password_strength(value: &str) -> Result<(), ValidationError> {
    if char_count(value) < 8 {
        return Err(fail("length", "Password must be at least 8 characters"));
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(fail("uppercase", "Password must contain at least one uppercase letter"));
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(fail("lowercase", "Password must contain at least one lowercase letter"));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(fail("digit", "Password must contain at least one number"));
    }
    Ok(())
}

/// 13 to 120 inclusive, fractions allowed.
pub fn age(value: f64) -> Result<(), ValidationError> {
    if value < 13.0 {
        return Err(fail("range", "You must be at least 13 years old"));
    }
    if value > 120.0 {
        return Err(fail("range", "Please enter a valid age"));
    }
    Ok(())
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn agreed(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        Err(fail("terms", "You must agree to the terms and conditions"))
    }
}

/// Non-empty, then a valid address.
pub fn required_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(fail("required", "Email is required"));
    }
    if !value.validate_email() {
        return Err(fail("email", "Please enter a valid email address"));
    }
    Ok(())
}

pub fn display_name(value: &str) -> Result<(), ValidationError> {
    let len = char_count(value);
    if len < 2 {
        return Err(fail("length", "Display name must be at least 2 characters"));
    }
    if len > 50 {
        return Err(fail("length", "Display name must be less than 50 characters"));
    }
    Ok(())
}

/// Empty, or a valid URL.
pub fn optional_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(fail("url", "Please enter a valid URL"))
    }
}

pub fn subject(value: &str) -> Result<(), ValidationError> {
    let len = char_count(value);
    if len < 5 {
        return Err(fail("length", "Subject must be at least 5 characters"));
    }
    if len > 100 {
        return Err(fail("length", "Subject must be less than 100 characters"));
    }
    Ok(())
}

pub fn message(value: &str) -> Result<(), ValidationError> {
    let len = char_count(value);
    if len < 10 {
        return Err(fail("length", "Message must be at least 10 characters"));
    }
    if len > 500 {
        return Err(fail("length", "Message must be less than 500 characters"));
    }
    Ok(())
}
