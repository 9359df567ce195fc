//! Default substitution and display formatting for movie fields.

use chrono::{DateTime, NaiveDate};

pub const NOT_AVAILABLE: &str = "N/A";

/// "Xh Ym", dropping a zero component. Missing or non-positive is "N/A".
pub fn format_runtime(minutes: Option<i64>) -> String {
    let minutes = match minutes {
        Some(m) if m > 0 => m,
        _ => return NOT_AVAILABLE.to_string(),
    };

    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Detail view rating: one decimal place.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}", r),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// List view rating: the backend's DECIMAL(3,1) text, e.g. "8.0".
pub fn format_list_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}", r),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_year(year: Option<i64>) -> String {
    match year {
        Some(y) => y.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Long form, e.g. "October 14, 1994". Accepts ISO dates, ISO date-times
/// and RFC 2822 (what the backend's JSON encoder produces for DATE
/// columns). Unrecognized input is returned unchanged.
pub fn format_release_date(raw: &str) -> String {
    match parse_date(raw.trim()) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Some(prefix) = raw.get(..10) {
        if raw[10..].starts_with('T') || raw[10..].starts_with(' ') {
            if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
                return Some(date);
            }
        }
    }
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|dt| dt.date_naive())
}
