//! Field-level input checks run before anything reaches the store.
//!
//! Each helper names the offending wire field in its `CoreError::Validation`
//! message so clients can tell which key to fix.

use crate::error::CoreError;

/// Reject empty or whitespace-only text.
pub fn validate_required_text(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Minimal email sanity check: something on both sides of a single `@`.
pub fn validate_email(value: &str, field: &str) -> Result<(), CoreError> {
    let mut parts = value.trim().split('@');
    let valid = matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
    );
    if !valid {
        return Err(CoreError::Validation(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(())
}

/// Reject negative or non-finite measurements.
pub fn validate_non_negative_f64(value: f64, field: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

pub fn validate_non_negative_i64(value: i64, field: &str) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a non-negative integer, got {value}"
        )));
    }
    Ok(())
}
