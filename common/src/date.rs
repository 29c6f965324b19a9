//! Exam date parsing
//!
//! Exam dates are kept as display text ("20 Jan 2024"). Sorting needs a
//! numeric key, so the text is split into day, month abbreviation and year
//! and the month is resolved through a fixed lookup table.

use crate::error::{Error, Result};
use chrono::NaiveDate;

const MONTHS: [(&str, u32); 12] = [
    ("Jan", 1),
    ("Feb", 2),
    ("Mar", 3),
    ("Apr", 4),
    ("May", 5),
    ("Jun", 6),
    ("Jul", 7),
    ("Aug", 8),
    ("Sep", 9),
    ("Oct", 10),
    ("Nov", 11),
    ("Dec", 12),
];

fn month_number(abbr: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(abbr))
        .map(|(_, number)| *number)
}

/// Parse "<day> <Mon> <year>"
pub fn parse_exam_date(text: &str) -> Result<NaiveDate> {
    let invalid = || Error::InvalidDate(text.to_string());

    let mut parts = text.split_whitespace();
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month = month_number(month).ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Milliseconds since the epoch at midnight of the exam date
pub fn exam_timestamp(text: &str) -> Result<i64> {
    let date = parse_exam_date(text)?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| Error::InvalidDate(text.to_string()))?;
    Ok(midnight.and_utc().timestamp_millis())
}
