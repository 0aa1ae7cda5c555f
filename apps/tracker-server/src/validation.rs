//! Request field validation.
//!
//! Each function turns one raw request field into a typed value or rejects
//! it. They are pure: no store access, no clock reads (callers pass `now`).
//! An empty string counts as an absent field.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use entities::ObjectId;
use tracker_protocol::CALENDAR_DATE_FORMAT;

/// A request field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was absent or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// An identifier does not have the identifier syntax.
    #[error("Invalid User ID")]
    InvalidIdFormat(String),

    /// Duration was not a positive whole number of minutes.
    #[error("Invalid Duration")]
    InvalidDuration(String),

    /// A date could not be parsed.
    #[error("Invalid date format")]
    InvalidDate(String),

    /// A limit was not an integer.
    #[error("Invalid limit value")]
    InvalidLimit(String),
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

fn validate_required(field: &'static str, raw: Option<&str>) -> Result<String, ValidationError> {
    present(raw)
        .map(str::to_string)
        .ok_or(ValidationError::MissingField(field))
}

/// Validates a username. The value is kept as supplied, untrimmed.
pub fn validate_username(raw: Option<&str>) -> Result<String, ValidationError> {
    validate_required("username", raw)
}

/// Validates an exercise description. The value is kept as supplied.
pub fn validate_description(raw: Option<&str>) -> Result<String, ValidationError> {
    validate_required("description", raw)
}

/// Checks that `raw` has the identifier syntax. Whether a record with that
/// identifier exists is not checked here.
pub fn validate_object_id(raw: &str) -> Result<ObjectId, ValidationError> {
    raw.parse()
        .map_err(|_| ValidationError::InvalidIdFormat(raw.to_string()))
}

/// Coerces a duration to a positive whole number of minutes.
///
/// Accepts anything that reads as a number (`"30"`, `" 30 "`, `"30.0"`,
/// `"3e1"`) as long as it is whole, positive and fits in a `u32`.
pub fn validate_duration(raw: Option<&str>) -> Result<u32, ValidationError> {
    let raw = raw.unwrap_or_default();
    let invalid = || ValidationError::InvalidDuration(raw.to_string());
    let text = raw.trim();

    if let Ok(minutes) = text.parse::<u32>() {
        return if minutes > 0 { Ok(minutes) } else { Err(invalid()) };
    }

    let value: f64 = text.parse().map_err(|_| invalid())?;
    if value.is_finite() && value > 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(invalid())
    }
}

/// Parses a calendar date.
///
/// Accepted forms: `2024-01-02`, an RFC 3339 timestamp (its UTC date is
/// used), `2024-01-02T10:30:00`, and the response format `Tue Jan 02 2024`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|timestamp| timestamp.date())
        })
        .or_else(|| NaiveDate::parse_from_str(text, CALENDAR_DATE_FORMAT).ok())
}

/// Validates an optional date bound. Absent stays absent.
pub fn validate_optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    present(raw)
        .map(|raw| {
            parse_calendar_date(raw).ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))
        })
        .transpose()
}

/// Validates a date, defaulting to `now` when absent.
pub fn validate_date(raw: Option<&str>, now: NaiveDate) -> Result<NaiveDate, ValidationError> {
    Ok(validate_optional_date(raw)?.unwrap_or(now))
}

/// Validates a result limit. Absent means no limit; `0` is a real limit.
///
/// Any integer is accepted. A negative limit means its magnitude, and
/// magnitudes beyond `u32::MAX` saturate, which reads as "every entry".
pub fn validate_limit(raw: Option<&str>) -> Result<Option<u32>, ValidationError> {
    let Some(raw) = present(raw) else {
        return Ok(None);
    };
    let text = raw.trim();
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidLimit(raw.to_string()));
    }

    let magnitude = digits
        .parse::<u64>()
        .map_or(u32::MAX, |n| u32::try_from(n).unwrap_or(u32::MAX));
    Ok(Some(magnitude))
}
