// Parsing for the text the student types in.
//
// Everything is trimmed first. Formats are strict: "2024-6-1" is rejected
// even though chrono would accept it.

use crate::error::{HubError, Result};
use chrono::{NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const MIN_PRIORITY: i64 = 1;
pub const MAX_PRIORITY: i64 = 5;

// Exact zero-padded layouts; `9` stands for any ASCII digit
const DATE_LAYOUT: &[u8] = b"9999-99-99";
const TIMESTAMP_LAYOUT: &[u8] = b"9999-99-99 99:99:99";

// chrono alone accepts single digits and runs of whitespace
fn matches_layout(input: &str, layout: &[u8]) -> bool {
    input.len() == layout.len()
        && input.bytes().zip(layout).all(|(byte, &slot)| match slot {
            b'9' => byte.is_ascii_digit(),
            literal => byte == literal,
        })
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if !matches_layout(trimmed, DATE_LAYOUT) {
        return Err(HubError::InvalidDate(trimmed.to_string()));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| HubError::InvalidDate(trimmed.to_string()))
}

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    if !matches_layout(trimmed, TIMESTAMP_LAYOUT) {
        return Err(HubError::InvalidTimestamp(trimmed.to_string()));
    }

    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .map_err(|_| HubError::InvalidTimestamp(trimmed.to_string()))
}

/// Parse a priority level between 1 and 5
pub fn parse_priority(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(level) if (MIN_PRIORITY..=MAX_PRIORITY).contains(&level) => Ok(level),
        _ => Err(HubError::InvalidPriority(trimmed.to_string())),
    }
}

/// Parse a row id
pub fn parse_id(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| HubError::InvalidId(trimmed.to_string()))
}

/// Trim a required text field, rejecting blanks
pub fn required(field: &'static str, input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(HubError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field; blank means `None`
pub fn optional(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
