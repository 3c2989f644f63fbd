//! fr-FR rendering of dates and bounded text.

use chrono::{DateTime, FixedOffset, NaiveDate};

/// `dd/mm/yyyy hh:mm:ss` in the offset the timestamp carries.
pub fn format_datetime_fr(at: &DateTime<FixedOffset>) -> String {
    at.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// `dd/mm/yyyy`.
pub fn format_date_fr(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Keep at most `max_chars` characters, appending `...` when something was cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
