//! Consecutive-day engagement streaks.

use crate::constants::MAX_STREAK_DAYS;
use crate::model::{JournalEntry, MoodEntry};
use chrono::NaiveDate;

/// Counts consecutive active calendar days walking backward from `anchor`.
///
/// A day is active when at least one mood entry OR one journal entry carries
/// a timestamp on that calendar date. The walk starts at the anchor day
/// itself and stops at the first inactive day, so the result is 0 exactly
/// when the anchor day has no activity.
///
/// The walk is bounded: the value saturates at [`MAX_STREAK_DAYS`] even if
/// the true streak is longer. This caps the worst-case cost and is a
/// documented limitation, not a bug.
///
/// Day attribution uses the calendar date of each entry's UTC timestamp;
/// callers that want wall-clock-local day boundaries should convert their
/// anchor (and record entries) accordingly.
///
/// # Examples
///
/// ```
/// use youmatter::analytics::streak_days;
/// use chrono::NaiveDate;
///
/// let anchor = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(streak_days(&[], &[], anchor), 0);
/// ```
pub fn streak_days(moods: &[MoodEntry], journals: &[JournalEntry], anchor: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = anchor;

    while streak < MAX_STREAK_DAYS {
        let active = moods.iter().any(|m| m.date.date_naive() == cursor)
            || journals.iter().any(|j| j.date.date_naive() == cursor);
        if !active {
            break;
        }
        streak += 1;
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break, // calendar begins; nothing further back to scan
        }
    }

    streak
}
