//! Date utilities for daily reset hour handling and storage encoding.

use chrono::{DateTime, Duration, Local, NaiveDate, SecondsFormat, Timelike, Utc};

use crate::db::error::DbError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Get adjusted "today" based on daily_reset_hour.
///
/// If the current hour is before the reset hour, "today" is actually "yesterday".
/// A workout logged at 01:00 with a reset hour of 4 counts towards the previous day.
pub fn get_adjusted_today(daily_reset_hour: u32) -> NaiveDate {
    adjusted_date(Local::now().naive_local(), daily_reset_hour)
}

fn adjusted_date(now: chrono::NaiveDateTime, daily_reset_hour: u32) -> NaiveDate {
    if now.hour() < daily_reset_hour {
        (now - Duration::days(1)).date()
    } else {
        now.date()
    }
}

/// Format a date as YYYY-MM-DD for SQL.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, DbError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| DbError::InvalidData(format!("invalid date: {value}")))
}

/// Current instant as stored in `*_at` columns.
///
/// Fixed-width so that text ordering matches chronological ordering.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DbError::InvalidData(format!("invalid timestamp: {value}")))
}
