//! Pre-flight checks for request bodies.
//!
//! Every failure is an [`ApiError::Validation`] raised before anything is
//! sent, so an invalid form never costs a round-trip.

use crate::api::ApiError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Require at least `min` characters after trimming.
pub fn min_len(field: &str, value: &str, min: usize) -> Result<()> {
    if value.trim().chars().count() < min {
        return Err(ApiError::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}

pub fn not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Require a strictly positive identifier.
pub fn positive_id(field: &str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(ApiError::Validation(format!("{} must be selected", field)));
    }
    Ok(())
}

pub fn non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ApiError::Validation(format!(
            "{} must be zero or greater",
            field
        )));
    }
    Ok(())
}

/// Loose address check: a non-empty local part and a dotted domain.
pub fn email(value: &str) -> Result<()> {
    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !value.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
                    .unwrap_or(false)
        }
        None => false,
    };
    if !valid {
        return Err(ApiError::Validation("Invalid email".to_string()));
    }
    Ok(())
}
