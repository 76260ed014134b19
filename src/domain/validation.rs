//! Input rules shared by the submission endpoints.
//!
//! Only presence is enforced for text fields. `donationAmount` and `timestamp`
//! additionally have to be parseable so they can be stored as typed columns.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value as JsonValue;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid donation amount")]
    InvalidAmount,

    #[error("Invalid timestamp")]
    InvalidTimestamp,

    #[error("Invalid request body")]
    MalformedBody,
}

/// Returns the value if it is present and non-empty.
pub fn required(field: Option<String>) -> Result<String, ValidationError> {
    match field {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingFields),
    }
}

/// `null`, `""`, `0` and `false` count as absent, like any other blank field.
fn is_blank(v: &JsonValue) -> bool {
    match v {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::Bool(b) => !b,
        _ => false,
    }
}

/// Ensures a loosely typed field is present without interpreting it yet.
pub fn required_value(field: Option<JsonValue>) -> Result<JsonValue, ValidationError> {
    match field {
        Some(v) if !is_blank(&v) => Ok(v),
        _ => Err(ValidationError::MissingFields),
    }
}

/// Accepts a JSON number or a numeric string (wallets report amounts as text, e.g. `"0.01"`).
pub fn parse_amount(v: &JsonValue) -> Result<f64, ValidationError> {
    let amount = match v {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    amount
        .filter(|a| a.is_finite())
        .ok_or(ValidationError::InvalidAmount)
}

/// Accepts an RFC 3339 string or integer epoch milliseconds.
pub fn parse_timestamp(v: &JsonValue) -> Result<DateTime<Utc>, ValidationError> {
    match v {
        JsonValue::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| ValidationError::InvalidTimestamp),
        JsonValue::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
            .ok_or(ValidationError::InvalidTimestamp),
        _ => Err(ValidationError::InvalidTimestamp),
    }
}
