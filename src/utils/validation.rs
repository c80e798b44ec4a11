use crate::utils::error::{PlannerError, Result};
use std::fmt::Display;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PlannerError::validation(
            field_name,
            format!("must be a finite number (got {})", value),
        ));
    }
    Ok(())
}

pub fn validate_non_negative<T: PartialOrd + Display + Default + Copy>(
    field_name: &str,
    value: T,
) -> Result<()> {
    if value < T::default() {
        return Err(PlannerError::validation(
            field_name,
            format!("must be greater than or equal to 0 (got {})", value),
        ));
    }
    Ok(())
}

pub fn validate_positive<T: PartialOrd + Display + Default + Copy>(
    field_name: &str,
    value: T,
) -> Result<()> {
    if value <= T::default() {
        return Err(PlannerError::validation(
            field_name,
            format!("must be greater than 0 (got {})", value),
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u16, min_value: u16) -> Result<()> {
    if value < min_value {
        return Err(PlannerError::config(
            field_name,
            format!("Value must be at least {} (got {})", min_value, value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlannerError::config(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(PlannerError::config(
            field_name,
            format!(
                "Unsupported value '{}'. Allowed values: {}",
                value,
                allowed.join(", ")
            ),
        ));
    }
    Ok(())
}
