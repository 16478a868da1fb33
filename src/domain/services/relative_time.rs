use chrono::{DateTime, Utc};

/// Source of "now" for relative timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_MONTH: f64 = 30.436875;
const DAYS_PER_YEAR: f64 = 365.25;

/// Human relative rendering of `timestamp` as seen from `now`,
/// e.g. "3 days ago" or "in an hour".
pub fn format_from_now(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(timestamp).num_seconds();
    let phrase = relative_phrase(delta.unsigned_abs() as f64);

    if delta < 0 {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

fn relative_phrase(seconds: f64) -> String {
    let minutes = (seconds / 60.0).round();
    let hours = (seconds / 3600.0).round();
    let days = (seconds / SECONDS_PER_DAY).round();
    let months = (seconds / SECONDS_PER_DAY / DAYS_PER_MONTH).round();
    let years = (seconds / SECONDS_PER_DAY / DAYS_PER_YEAR).round();

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes as u64)
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", hours as u64)
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{} days", days as u64)
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{} months", months as u64)
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{} years", years as u64)
    }
}
