//! Conversion between HTML `<input type="date">` values and calendar dates.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use super::error::DateParseError;

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// The value must split on `-` into exactly three numeric segments and name
/// a real calendar day. The year takes exactly four digits; month and day
/// take one or two. No timezone or locale handling is applied.
pub fn parse_html_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let segments: Vec<&str> = value.split('-').collect();
    let [year, month, day] = segments.as_slice() else {
        return Err(DateParseError::WrongSegmentCount(segments.len()));
    };

    let year: i32 = parse_segment(year, 4..=4)?;
    let month: u32 = parse_segment(month, 1..=2)?;
    let day: u32 = parse_segment(day, 1..=2)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateParseError::OutOfRange { year, month, day })
}

/// Checks that a date can be written as `YYYY-MM-DD` and read back.
///
/// Years outside `0000..=9999` would need a sign or a fifth digit.
pub fn ensure_html_date(date: NaiveDate) -> Result<NaiveDate, DateParseError> {
    if (0..=9999).contains(&date.year()) {
        Ok(date)
    } else {
        Err(DateParseError::OutOfRange {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        })
    }
}

/// Formats a date the way HTML date inputs expect it.
pub fn format_html_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_segment<T: std::str::FromStr>(
    segment: &str,
    width: RangeInclusive<usize>,
) -> Result<T, DateParseError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateParseError::NonNumeric(segment.to_string()));
    }
    if !width.contains(&segment.len()) {
        return Err(DateParseError::SegmentWidth(segment.to_string()));
    }
    segment
        .parse()
        .map_err(|_| DateParseError::NonNumeric(segment.to_string()))
}
