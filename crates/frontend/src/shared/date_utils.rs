/// Utilities for date and time formatting
///
/// Значения `<input type="date">` / `<input type="time">` приходят строками
/// "YYYY-MM-DD" и "HH:MM"; пустая строка означает "не задано".
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// "2025-11-01" -> Some(date); пустая или некорректная строка -> None
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// "10:30" или "10:30:00" -> Some(time)
pub fn parse_time_input(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn time_input_value(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Format date to DD.MM.YYYY, "-" if not set
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Format timestamp to DD.MM.YYYY HH:MM
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}
