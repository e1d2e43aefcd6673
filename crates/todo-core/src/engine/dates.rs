//! Date derivations: overdue state and human-readable day labels.

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use crate::models::Task;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// A task is overdue when its due date has passed and it is not completed.
///
/// A due date counts from midnight UTC of that day, the instant a browser
/// assigns to a bare `YYYY-MM-DD` string.
pub fn is_overdue(task: &Task, now: Timestamp) -> bool {
    if task.completed {
        return false;
    }
    task.due_date
        .and_then(|due| due.to_zoned(TimeZone::UTC).ok())
        .is_some_and(|due| due.timestamp() < now)
}

/// Whole days between two instants, rounded up.
fn ceil_days_between(a: Timestamp, b: Timestamp) -> i64 {
    let diff = (b.as_millisecond() - a.as_millisecond()).abs();
    let days = diff / MILLIS_PER_DAY;
    if diff % MILLIS_PER_DAY == 0 {
        days
    } else {
        days + 1
    }
}

/// Label describing when a task was created, relative to `now`.
///
/// The day difference is rounded up, so anything within the last 24 hours is
/// "Today" and 24–48 hours ago is "Yesterday". An identical instant yields a
/// zero-day difference and reads "-1 days ago". Older than a week falls back
/// to the calendar date in `tz`, always written as ISO `YYYY-MM-DD` rather
/// than a locale-specific format so output is stable across systems.
///
/// # Examples
///
/// ```rust
/// use todo_core::engine::relative_day_label;
/// use jiff::{tz::TimeZone, Timestamp, ToSpan};
///
/// let now: Timestamp = "2024-03-10T12:00:00Z".parse().unwrap();
/// let label = |hours: i64| {
///     let created = now.checked_sub(hours.hours()).unwrap();
///     relative_day_label(created, now, &TimeZone::UTC)
/// };
///
/// assert_eq!(label(3), "Today");
/// assert_eq!(label(30), "Yesterday");
/// assert_eq!(label(24 * 4), "3 days ago");
/// assert_eq!(label(24 * 10), "2024-02-29");
/// ```
pub fn relative_day_label(created_at: Timestamp, now: Timestamp, tz: &TimeZone) -> String {
    match ceil_days_between(created_at, now) {
        1 => "Today".to_string(),
        2 => "Yesterday".to_string(),
        days if days <= 7 => format!("{} days ago", days - 1),
        _ => created_at.to_zoned(tz.clone()).date().to_string(),
    }
}

/// Label for a due date relative to `today`.
pub fn due_date_label(due: Date, today: Date) -> String {
    if due == today {
        "Today".to_string()
    } else if today.tomorrow().is_ok_and(|tomorrow| tomorrow == due) {
        "Tomorrow".to_string()
    } else {
        due.to_string()
    }
}
