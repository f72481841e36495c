//! Dates as the site shows them: Japanese calendar order, Japan time.
use crate::error_chain_fmt;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};

const JAPAN_UTC_OFFSET_SECS: i32 = 9 * 3600;

#[derive(thiserror::Error)]
pub enum DateError {
    #[error("invalid date {input:?}: expected an RFC 3339 timestamp or YYYY-MM-DD")]
    Invalid {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl std::fmt::Debug for DateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// `2024-03-15T10:30:00Z` -> `2024/3/15`
pub fn format_date(input: &str) -> Result<String, DateError> {
    let date = parse_calendar_date(input)?;
    Ok(short_form(date))
}

/// `2024-03-15T10:30:00Z` -> `2024年3月15日`
pub fn format_date_long(input: &str) -> Result<String, DateError> {
    let date = parse_calendar_date(input)?;
    Ok(long_form(date))
}

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    short_form(japan_date(ts))
}

pub fn format_timestamp_long(ts: DateTime<Utc>) -> String {
    long_form(japan_date(ts))
}

fn short_form(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

fn long_form(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// Timestamps are moved to Japan time; bare dates are taken as written.
fn parse_calendar_date(input: &str) -> Result<NaiveDate, DateError> {
    let trimmed = input.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(japan_date(ts.with_timezone(&Utc)));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|source| DateError::Invalid {
        input: input.to_string(),
        source,
    })
}

fn japan_date(ts: DateTime<Utc>) -> NaiveDate {
    match FixedOffset::east_opt(JAPAN_UTC_OFFSET_SECS) {
        Some(jst) => ts.with_timezone(&jst).date_naive(),
        None => ts.date_naive(),
    }
}
