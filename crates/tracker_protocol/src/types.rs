//! Shared wire type helpers.

use chrono::NaiveDate;

/// `strftime` pattern for dates in responses, e.g. `Mon Jan 02 2006`.
pub const CALENDAR_DATE_FORMAT: &str = "%a %b %d %Y";

/// Formats a date the way every response renders it: weekday, month
/// abbreviation, zero-padded day and year.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}
