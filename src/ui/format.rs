//! Plain-text rendering of records for the terminal

use chrono::{DateTime, Utc};
use colored::*;

use crate::models::BookingStatus;

pub fn format_currency(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("${:.2}", value),
        None => "-".to_string(),
    }
}

pub fn format_date(at: Option<DateTime<Utc>>) -> String {
    at.map(|at| at.format("%b %d %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_status(status: Option<BookingStatus>) -> ColoredString {
    match status {
        Some(BookingStatus::Unconfirmed) => "unconfirmed".bright_blue(),
        Some(BookingStatus::CheckedIn) => "checked-in".bright_green(),
        Some(BookingStatus::CheckedOut) => "checked-out".dimmed(),
        None => "-".normal(),
    }
}

/// Whole days between `from` and `to`, described relative to today
pub fn format_distance(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let days = (to.date_naive() - from.date_naive()).num_days();
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 0 => format!("in {} days", d),
        d => format!("{} days ago", -d),
    }
}
