//! Display helpers for movie fields.

use chrono::{DateTime, NaiveDate, Utc};

/// `"2h 2m"`, or `"N/A"` when the runtime is unknown.
pub fn format_runtime(minutes: u32) -> String {
    if minutes == 0 {
        return "N/A".to_string();
    }
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// `"October 1, 2019"` for an ISO date, `"Unknown"` when empty or malformed.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => "Unknown".to_string(),
    }
}

/// Same style as [`format_date`], for review timestamps.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// Whole US dollars with thousands separators, `"N/A"` for zero.
pub fn format_currency(amount: u64) -> String {
    if amount == 0 {
        return "N/A".to_string();
    }

    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

/// Rating with one decimal place.
pub fn format_rating(vote_average: f64) -> String {
    format!("{:.1}", vote_average)
}
