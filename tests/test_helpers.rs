#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use youmatter::model::UserProfile;

/// A fixed instant all scenario tests anchor on, so calendar-day math is
/// deterministic regardless of when the suite runs.
pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 18, 0, 0).unwrap()
}

/// An instant the given number of days before the anchor, same time of day.
pub fn days_before_anchor(days: i64) -> DateTime<Utc> {
    anchor() - Duration::days(days)
}

/// A profile that joined two weeks before the anchor.
pub fn test_profile() -> UserProfile {
    UserProfile {
        id: 1,
        email: "sam@example.com".to_string(),
        name: "sam".to_string(),
        joined_date: days_before_anchor(14),
    }
}
