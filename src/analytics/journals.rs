//! Writing statistics, search, and display selection over journal history.

use crate::model::JournalEntry;
use chrono::{DateTime, Datelike, Utc};

/// Aggregate writing statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalStats {
    /// Total number of journal entries ever written.
    pub total_entries: usize,
    /// Sum of the frozen per-entry word counts.
    pub total_words: usize,
    /// Entries whose timestamp falls in the anchor's calendar month and year.
    pub entries_this_month: usize,
}

/// Computes aggregate statistics over the full journal history.
///
/// `total_words` sums each entry's frozen word count, so it is independent of
/// entry order. `entries_this_month` matches on both calendar month and year
/// of the anchor instant.
pub fn aggregate_stats(journals: &[JournalEntry], anchor: DateTime<Utc>) -> JournalStats {
    let entries_this_month = journals
        .iter()
        .filter(|entry| entry.date.month() == anchor.month() && entry.date.year() == anchor.year())
        .count();

    JournalStats {
        total_entries: journals.len(),
        total_words: journals.iter().map(|entry| entry.word_count).sum(),
        entries_this_month,
    }
}

/// Filters entries whose content contains `query`, case-insensitively.
///
/// An empty query returns the full history unfiltered.
///
/// # Examples
///
/// ```
/// use youmatter::analytics::search;
///
/// let matches = search(&[], "anything");
/// assert!(matches.is_empty());
/// ```
pub fn search(journals: &[JournalEntry], query: &str) -> Vec<JournalEntry> {
    if query.is_empty() {
        return journals.to_vec();
    }
    let needle = query.to_lowercase();
    journals
        .iter()
        .filter(|entry| entry.content.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Selects entries for display, newest first.
///
/// Returns the full sequence when `show_all` is true, otherwise the most
/// recent `max_count` entries by store order. Either way the selection is
/// reversed from the chronological store order to newest-first. Pure and
/// idempotent: the same input always yields the same output.
pub fn recent_window(
    journals: &[JournalEntry],
    max_count: usize,
    show_all: bool,
) -> Vec<JournalEntry> {
    let selected = if show_all {
        journals
    } else {
        &journals[journals.len().saturating_sub(max_count)..]
    };
    selected.iter().rev().cloned().collect()
}

/// Truncates content for a preview card.
///
/// Content longer than `max_chars` characters is cut there and suffixed with
/// an ellipsis; shorter content is returned unchanged.
pub fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        content.to_string()
    } else {
        let mut truncated: String = content.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    }
}
