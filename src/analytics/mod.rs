//! Derived metrics over the mood and journal histories.
//!
//! Everything in this module is a pure function over entry slices: the
//! analytics layer consumes the same underlying lists the domain layer
//! persists, read-only, and never touches storage itself. Callers pass the
//! anchor instant explicitly, which keeps every computation deterministic
//! and testable.

/// Writing statistics, search, and display selection.
pub mod journals;
/// Mood frequency over a trailing window.
pub mod moods;
/// Consecutive-day engagement streaks.
pub mod streak;

pub use journals::{aggregate_stats, preview, recent_window, search, JournalStats};
pub use moods::{mood_on_day, most_frequent_mood, tracked_in_window, MoodFrequency};
pub use streak::streak_days;

use crate::model::UserProfile;
use chrono::{DateTime, Utc};

/// Whole days elapsed since the profile's join date.
///
/// Truncates toward zero, matching a floor of the elapsed time for any
/// profile joined in the past.
pub fn days_since_joining(profile: &UserProfile, now: DateTime<Utc>) -> i64 {
    (now - profile.joined_date).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_days_since_joining() {
        let profile = UserProfile {
            id: 1,
            email: "sam@example.com".to_string(),
            name: "sam".to_string(),
            joined_date: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        };
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(days_since_joining(&profile, now), 14);

        // Same day, a few hours later.
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap();
        assert_eq!(days_since_joining(&profile, now), 0);
    }
}
