//! Mood frequency statistics over a trailing window.

use crate::model::{Mood, MoodEntry};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// The most frequent mood category in a window, with its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodFrequency {
    /// The winning category.
    pub mood: Mood,
    /// How many times it occurred in the window.
    pub count: usize,
}

/// Ranks mood categories by frequency over the trailing window and returns
/// the most frequent one.
///
/// The window covers entries with `date >= anchor - window_days`. Ties are
/// broken deterministically: the earliest category in the canonical
/// declaration order ([`Mood::ALL`], happy first) wins. An empty window
/// yields `happy` with count 0 rather than failing.
///
/// # Examples
///
/// ```
/// use youmatter::analytics::most_frequent_mood;
/// use youmatter::model::Mood;
/// use chrono::Utc;
///
/// let top = most_frequent_mood(&[], 7, Utc::now());
/// assert_eq!(top.mood, Mood::Happy);
/// assert_eq!(top.count, 0);
/// ```
pub fn most_frequent_mood(
    moods: &[MoodEntry],
    window_days: i64,
    anchor: DateTime<Utc>,
) -> MoodFrequency {
    let cutoff = anchor - Duration::days(window_days);
    let mut counts = [0usize; Mood::ALL.len()];
    for entry in moods.iter().filter(|m| m.date >= cutoff) {
        counts[entry.mood as usize] += 1;
    }

    let mut best = MoodFrequency {
        mood: Mood::Happy,
        count: 0,
    };
    for (index, &count) in counts.iter().enumerate() {
        // Strictly greater, so the earliest category keeps ties.
        if count > best.count {
            best = MoodFrequency {
                mood: Mood::ALL[index],
                count,
            };
        }
    }
    best
}

/// Counts mood entries recorded within the trailing window.
pub fn tracked_in_window(moods: &[MoodEntry], window_days: i64, anchor: DateTime<Utc>) -> usize {
    let cutoff = anchor - Duration::days(window_days);
    moods.iter().filter(|m| m.date >= cutoff).count()
}

/// Returns the first mood entry recorded on the given calendar day, if any.
///
/// "First" is by store order, so with chronological insertion this is the
/// earliest observation of the day.
pub fn mood_on_day(moods: &[MoodEntry], day: NaiveDate) -> Option<&MoodEntry> {
    moods.iter().find(|m| m.date.date_naive() == day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    fn mood_at(mood: Mood, days_ago: i64) -> MoodEntry {
        let date = anchor() - Duration::days(days_ago);
        MoodEntry {
            id: date.timestamp_millis(),
            mood,
            notes: String::new(),
            date,
            user_id: 1,
        }
    }

    #[test]
    fn test_most_frequent_mood_basic() {
        let moods = vec![
            mood_at(Mood::Happy, 0),
            mood_at(Mood::Happy, 1),
            mood_at(Mood::Sad, 2),
        ];
        let top = most_frequent_mood(&moods, 7, anchor());
        assert_eq!(top.mood, Mood::Happy);
        assert_eq!(top.count, 2);
    }

    #[test]
    fn test_most_frequent_mood_ignores_entries_outside_window() {
        let moods = vec![
            mood_at(Mood::Sad, 10),
            mood_at(Mood::Sad, 9),
            mood_at(Mood::Calm, 1),
        ];
        let top = most_frequent_mood(&moods, 7, anchor());
        assert_eq!(top.mood, Mood::Calm);
        assert_eq!(top.count, 1);
    }

    #[test]
    fn test_most_frequent_mood_empty_window_defaults_to_happy() {
        let top = most_frequent_mood(&[], 7, anchor());
        assert_eq!(top.mood, Mood::Happy);
        assert_eq!(top.count, 0);

        let out_of_window = vec![mood_at(Mood::Angry, 30)];
        let top = most_frequent_mood(&out_of_window, 7, anchor());
        assert_eq!(top.mood, Mood::Happy);
        assert_eq!(top.count, 0);
    }

    #[test]
    fn test_most_frequent_mood_tie_break_is_canonical_order() {
        // Stressed appears first in the history, but Sad precedes it in
        // canonical order, so Sad wins the tie regardless of traversal.
        let moods = vec![
            mood_at(Mood::Stressed, 0),
            mood_at(Mood::Sad, 1),
            mood_at(Mood::Stressed, 2),
            mood_at(Mood::Sad, 3),
        ];
        let top = most_frequent_mood(&moods, 7, anchor());
        assert_eq!(top.mood, Mood::Sad);
        assert_eq!(top.count, 2);
    }

    #[test]
    fn test_tracked_in_window() {
        let moods = vec![
            mood_at(Mood::Happy, 0),
            mood_at(Mood::Tired, 3),
            mood_at(Mood::Tired, 8),
        ];
        assert_eq!(tracked_in_window(&moods, 7, anchor()), 2);
        assert_eq!(tracked_in_window(&moods, 30, anchor()), 3);
    }

    #[test]
    fn test_mood_on_day() {
        let moods = vec![
            mood_at(Mood::Anxious, 1),
            mood_at(Mood::Calm, 0),
            mood_at(Mood::Excited, 0),
        ];
        let today = anchor().date_naive();

        // First entry of the day by store order.
        let found = mood_on_day(&moods, today).unwrap();
        assert_eq!(found.mood, Mood::Calm);

        let two_days_ago = today.pred_opt().unwrap().pred_opt().unwrap();
        assert!(mood_on_day(&moods, two_days_ago).is_none());
    }
}
