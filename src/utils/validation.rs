use crate::utils::error::{Result, SortError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reject NaN and infinities before anything is serialized for the wire.
pub fn validate_finite_numbers(numbers: &[f64]) -> Result<()> {
    if numbers.iter().any(|n| !n.is_finite()) {
        return Err(SortError::invalid_input(
            "input array must contain only finite numbers",
        ));
    }
    Ok(())
}

/// Gate for untyped callers (CLI, JSON payloads): the value must be an array
/// whose elements are all finite numbers.
pub fn numbers_from_json(value: &serde_json::Value) -> Result<Vec<f64>> {
    let items = value
        .as_array()
        .ok_or_else(|| SortError::invalid_input("input must be an array of numbers"))?;

    let mut numbers = Vec::with_capacity(items.len());
    for item in items {
        let number = item.as_f64().ok_or_else(|| {
            SortError::invalid_input("input array must contain only finite numbers")
        })?;
        numbers.push(number);
    }

    validate_finite_numbers(&numbers)?;
    Ok(numbers)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SortError::config(format!("{} cannot be empty", field_name)));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SortError::config(format!(
                "Unsupported URL scheme for {}: {}",
                field_name, scheme
            ))),
        },
        Err(e) => Err(SortError::config(format!(
            "Invalid URL format for {}: {}",
            field_name, e
        ))),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SortError::config(format!(
            "{} cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}
