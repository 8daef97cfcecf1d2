//! Day and date navigation
//!
//! Two independent cursors: a bounds-checked cursor over the backend's
//! ordered weekday labels, and unbounded adjacent-day arithmetic over ISO
//! calendar dates.

use chrono::{Duration, NaiveDate};

/// The label before `selected` in `days`, if any
///
/// `days` keeps the backend's declared order, which is not necessarily
/// calendar order. No wraparound: at the first label there is no previous.
pub fn previous_label(days: &[String], selected: &str) -> Option<String> {
    let idx = days.iter().position(|d| d == selected)?;
    if idx == 0 {
        return None;
    }
    Some(days[idx - 1].clone())
}

/// The label after `selected` in `days`, if any
pub fn next_label(days: &[String], selected: &str) -> Option<String> {
    let idx = days.iter().position(|d| d == selected)?;
    days.get(idx + 1).cloned()
}

/// Today as an ISO date string
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// The calendar day before `date`, or `date` unchanged if it does not parse
pub fn previous_date(date: &str) -> String {
    shift_date(date, -1)
}

/// The calendar day after `date`, or `date` unchanged if it does not parse
pub fn next_date(date: &str) -> String {
    shift_date(date, 1)
}

fn shift_date(date: &str, days: i64) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => (parsed + Duration::days(days))
            .format("%Y-%m-%d")
            .to_string(),
        // Unparseable input makes navigation a silent no-op
        Err(_) => date.to_string(),
    }
}
