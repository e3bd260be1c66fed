//! Reusable field validators
//!
//! Entity payloads are validated explicitly before any persistence call, with
//! every violated constraint collected into a list rather than failing on the
//! first one.

use crate::core::error::{FieldViolation, ValidationError};

/// Validator: string must be present and non-blank after trimming
pub fn required_string(field: &str, value: &str, label: &str) -> Option<FieldViolation> {
    if value.trim().is_empty() {
        Some(FieldViolation::new(field, format!("{} is required", label)))
    } else {
        None
    }
}

/// Validator: string length must not exceed `max` characters
pub fn max_length(field: &str, value: &str, label: &str, max: usize) -> Option<FieldViolation> {
    if value.chars().count() > max {
        Some(FieldViolation::new(
            field,
            format!("{} cannot exceed {} characters", label, max),
        ))
    } else {
        None
    }
}

/// Validator: number must not be negative
pub fn non_negative(field: &str, value: f64, label: &str) -> Option<FieldViolation> {
    if value < 0.0 {
        Some(FieldViolation::new(
            field,
            format!("{} cannot be negative", label),
        ))
    } else {
        None
    }
}

/// Validator: integer must fall within an inclusive range
pub fn in_range(field: &str, value: i64, label: &str, min: i64, max: i64) -> Option<FieldViolation> {
    if value < min {
        Some(FieldViolation::new(
            field,
            format!("{} must be at least {}", label, min),
        ))
    } else if value > max {
        Some(FieldViolation::new(
            field,
            format!("{} cannot exceed {}", label, max),
        ))
    } else {
        None
    }
}

/// Collect violations into a result, succeeding when the list is empty
pub fn check(violations: Vec<Option<FieldViolation>>) -> Result<(), ValidationError> {
    let violations: Vec<FieldViolation> = violations.into_iter().flatten().collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::FieldErrors(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string_blank_returns_violation() {
        let v = required_string("name", "   ", "Menu item name").unwrap();
        assert_eq!(v.field, "name");
        assert!(v.message.contains("required"));
    }

    #[test]
    fn test_required_string_present_returns_none() {
        assert!(required_string("name", "Pad Thai", "Menu item name").is_none());
    }

    #[test]
    fn test_max_length_counts_characters() {
        assert!(max_length("name", &"é".repeat(100), "Name", 100).is_none());
        assert!(max_length("name", &"é".repeat(101), "Name", 100).is_some());
    }

    #[test]
    fn test_non_negative() {
        assert!(non_negative("price", 0.0, "Price").is_none());
        assert!(non_negative("price", 12.5, "Price").is_none());
        let v = non_negative("price", -1.0, "Price").unwrap();
        assert_eq!(v.message, "Price cannot be negative");
    }

    #[test]
    fn test_in_range_bounds_inclusive() {
        assert!(in_range("tableNumber", 1, "Table number", 1, 100).is_none());
        assert!(in_range("tableNumber", 100, "Table number", 1, 100).is_none());
        assert!(in_range("tableNumber", 0, "Table number", 1, 100).is_some());
        assert!(in_range("tableNumber", 101, "Table number", 1, 100).is_some());
    }

    #[test]
    fn test_check_collects_all_violations() {
        let result = check(vec![
            required_string("name", "", "Name"),
            non_negative("price", -3.0, "Price"),
            max_length("description", "ok", "Description", 500),
        ]);
        let err = result.unwrap_err();
        let ValidationError::FieldErrors(fields) = err;
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_check_empty_is_ok() {
        assert!(check(vec![None, None]).is_ok());
    }
}
