//! The domain layer: typed CRUD over mood and journal histories.
//!
//! [`Tracker`] owns an [`EntryStore`] over an injected storage port and
//! exposes the operations the UI collaborator calls: recording moods and
//! journal entries, deleting journal entries, settings load/save, clearing
//! all data, and export assembly. All operations are synchronous; validation
//! failures are rejected before any persistence attempt.

use crate::constants::{JOURNALS_KEY, MOODS_KEY, SETTINGS_KEY};
use crate::errors::{AppResult, ValidationError};
use crate::export::ExportBundle;
use crate::model::{JournalEntry, Mood, MoodEntry, Settings, UserProfile};
use crate::storage::StoragePort;
use crate::store::{EntryStore, LoadOutcome};
use chrono::{DateTime, Utc};
use tracing::info;

/// Allocates entry identifiers derived from the creation instant.
///
/// IDs are the creation time in milliseconds, bumped past the previously
/// issued ID when two entries are created within the same millisecond. This
/// keeps IDs sortable by creation time while guaranteeing uniqueness under
/// rapid successive writes within a process.
#[derive(Debug, Default)]
struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    fn next(&mut self, now: DateTime<Utc>) -> i64 {
        let id = now.timestamp_millis().max(self.last + 1);
        self.last = id;
        id
    }
}

/// The wellbeing tracker domain layer.
///
/// # Examples
///
/// ```
/// use youmatter::model::Mood;
/// use youmatter::storage::MemoryStorage;
/// use youmatter::tracker::Tracker;
///
/// let mut tracker = Tracker::new(MemoryStorage::new());
/// let entry = tracker.record_mood(Mood::Calm, "quiet evening", 1).unwrap();
/// assert_eq!(entry.mood, Mood::Calm);
/// assert_eq!(tracker.moods().unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct Tracker<S: StoragePort> {
    store: EntryStore<S>,
    ids: IdGenerator,
}

impl<S: StoragePort> Tracker<S> {
    /// Creates a tracker over the given storage port.
    pub fn new(storage: S) -> Self {
        Tracker {
            store: EntryStore::new(storage),
            ids: IdGenerator::default(),
        }
    }

    /// Records a mood observation at the current instant.
    ///
    /// Notes may be empty. The persisted entry is returned.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read or written.
    pub fn record_mood(
        &mut self,
        mood: Mood,
        notes: impl Into<String>,
        user_id: i64,
    ) -> AppResult<MoodEntry> {
        self.record_mood_at(mood, notes, user_id, Utc::now())
    }

    /// Records a mood observation with an explicit timestamp.
    ///
    /// The timestamp determines the entry's calendar-day attribution for
    /// streaks and window statistics; production callers use
    /// [`record_mood`](Self::record_mood).
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read or written.
    pub fn record_mood_at(
        &mut self,
        mood: Mood,
        notes: impl Into<String>,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> AppResult<MoodEntry> {
        let entry = MoodEntry {
            id: self.ids.next(now),
            mood,
            notes: notes.into(),
            date: now,
            user_id,
        };
        self.store.append(MOODS_KEY, entry.clone())?;
        info!("Recorded mood '{}' with id {}", entry.mood, entry.id);
        Ok(entry)
    }

    /// Saves a journal entry written at the current instant.
    ///
    /// Content is trimmed; the word count is computed once here and frozen.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyContent` (before any persistence
    /// attempt) when the trimmed content is empty, or a storage error if the
    /// history cannot be read or written.
    pub fn record_journal(&mut self, content: &str, user_id: i64) -> AppResult<JournalEntry> {
        self.record_journal_at(content, user_id, Utc::now())
    }

    /// Saves a journal entry with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Same as [`record_journal`](Self::record_journal).
    pub fn record_journal_at(
        &mut self,
        content: &str,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> AppResult<JournalEntry> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyContent.into());
        }

        let entry = JournalEntry {
            id: self.ids.next(now),
            content: trimmed.to_string(),
            word_count: trimmed.split_whitespace().count(),
            date: now,
            user_id,
        };
        self.store.append(JOURNALS_KEY, entry.clone())?;
        info!(
            "Saved journal entry {} ({} words)",
            entry.id, entry.word_count
        );
        Ok(entry)
    }

    /// Deletes the journal entry with the given id.
    ///
    /// A no-op (without error) when no entry has that id. No corresponding
    /// delete exists for mood entries.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the history cannot be read or written.
    pub fn delete_journal_entry(&mut self, id: i64) -> AppResult<Vec<JournalEntry>> {
        let remaining = self.store.remove_by_id(JOURNALS_KEY, id)?;
        info!("Deleted journal entry {} if present", id);
        Ok(remaining)
    }

    /// The full mood history in chronological store order.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing store cannot be read; missing
    /// or malformed blobs yield an empty history instead.
    pub fn moods(&self) -> AppResult<Vec<MoodEntry>> {
        Ok(self.load_moods()?.into_entries())
    }

    /// The mood history load outcome, exposing whether the blob was
    /// recovered from missing or malformed data.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing store cannot be read.
    pub fn load_moods(&self) -> AppResult<LoadOutcome<MoodEntry>> {
        Ok(self.store.load(MOODS_KEY)?)
    }

    /// The full journal history in chronological store order.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing store cannot be read; missing
    /// or malformed blobs yield an empty history instead.
    pub fn journals(&self) -> AppResult<Vec<JournalEntry>> {
        Ok(self.load_journals()?.into_entries())
    }

    /// The journal history load outcome, exposing whether the blob was
    /// recovered from missing or malformed data.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing store cannot be read.
    pub fn load_journals(&self) -> AppResult<LoadOutcome<JournalEntry>> {
        Ok(self.store.load(JOURNALS_KEY)?)
    }

    /// The current settings; defaults on first read.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing store cannot be read.
    pub fn settings(&self) -> AppResult<Settings> {
        Ok(self.store.load_record(SETTINGS_KEY)?)
    }

    /// Overwrites the settings record wholesale.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the record cannot be written.
    pub fn save_settings(&mut self, settings: Settings) -> AppResult<()> {
        self.store.save_record(SETTINGS_KEY, &settings)?;
        info!("Saved settings");
        Ok(())
    }

    /// Permanently removes the mood history, journal history, and settings.
    ///
    /// # Errors
    ///
    /// Returns a storage error if any of the keys cannot be deleted.
    pub fn clear_all(&mut self) -> AppResult<()> {
        self.store.remove_key(MOODS_KEY)?;
        self.store.remove_key(JOURNALS_KEY)?;
        self.store.remove_key(SETTINGS_KEY)?;
        info!("Cleared all stored data");
        Ok(())
    }

    /// Assembles an export bundle from the current state.
    ///
    /// # Errors
    ///
    /// Returns a storage error if any history cannot be read.
    pub fn export(&self, profile: UserProfile, now: DateTime<Utc>) -> AppResult<ExportBundle> {
        Ok(ExportBundle::assemble(
            profile,
            self.settings()?,
            self.moods()?,
            self.journals()?,
            now,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;

    fn tracker() -> Tracker<MemoryStorage> {
        Tracker::new(MemoryStorage::new())
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_record_mood_persists_entry() {
        let mut tracker = tracker();
        let entry = tracker
            .record_mood_at(Mood::Anxious, "deadline week", 7, instant())
            .unwrap();

        assert_eq!(entry.mood, Mood::Anxious);
        assert_eq!(entry.notes, "deadline week");
        assert_eq!(entry.user_id, 7);
        assert_eq!(entry.date, instant());

        let moods = tracker.moods().unwrap();
        assert_eq!(moods, vec![entry]);
    }

    #[test]
    fn test_record_mood_empty_notes_allowed() {
        let mut tracker = tracker();
        let entry = tracker.record_mood_at(Mood::Happy, "", 1, instant()).unwrap();
        assert_eq!(entry.notes, "");
    }

    #[test]
    fn test_record_journal_trims_and_counts_words() {
        let mut tracker = tracker();
        let entry = tracker
            .record_journal_at("  hello   world\nfoo  ", 1, instant())
            .unwrap();

        assert_eq!(entry.content, "hello   world\nfoo");
        assert_eq!(entry.word_count, 3);
    }

    #[test]
    fn test_record_journal_rejects_empty_content() {
        let mut tracker = tracker();
        for content in ["", "   ", "\n\t "] {
            let result = tracker.record_journal_at(content, 1, instant());
            match result {
                Err(AppError::Validation(ValidationError::EmptyContent)) => {}
                _ => panic!("Expected EmptyContent validation error"),
            }
        }
        // Nothing was persisted by the rejected attempts.
        assert!(tracker.journals().unwrap().is_empty());
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut tracker = tracker();
        let now = instant();
        let a = tracker.record_mood_at(Mood::Happy, "", 1, now).unwrap();
        let b = tracker.record_mood_at(Mood::Sad, "", 1, now).unwrap();
        let c = tracker.record_journal_at("note", 1, now).unwrap();

        assert!(a.id < b.id);
        assert!(b.id < c.id);
    }

    #[test]
    fn test_delete_journal_entry() {
        let mut tracker = tracker();
        let first = tracker.record_journal_at("keep me", 1, instant()).unwrap();
        let second = tracker
            .record_journal_at("delete me", 1, instant())
            .unwrap();

        let remaining = tracker.delete_journal_entry(second.id).unwrap();
        assert_eq!(remaining, vec![first.clone()]);
        assert_eq!(tracker.journals().unwrap(), vec![first]);
    }

    #[test]
    fn test_delete_absent_journal_entry_is_noop() {
        let mut tracker = tracker();
        let entry = tracker.record_journal_at("stays", 1, instant()).unwrap();

        let remaining = tracker.delete_journal_entry(999).unwrap();
        assert_eq!(remaining, vec![entry]);
    }

    #[test]
    fn test_settings_default_then_saved() {
        let mut tracker = tracker();
        assert_eq!(tracker.settings().unwrap(), Settings::default());

        let mut settings = Settings::default();
        settings.dark_mode = true;
        settings.journal_reminders = true;
        tracker.save_settings(settings).unwrap();

        assert_eq!(tracker.settings().unwrap(), settings);
    }

    #[test]
    fn test_clear_all_removes_everything() {
        let mut tracker = tracker();
        tracker.record_mood_at(Mood::Happy, "", 1, instant()).unwrap();
        tracker.record_journal_at("note", 1, instant()).unwrap();
        let mut settings = Settings::default();
        settings.dark_mode = true;
        tracker.save_settings(settings).unwrap();

        tracker.clear_all().unwrap();

        assert!(tracker.moods().unwrap().is_empty());
        assert!(tracker.journals().unwrap().is_empty());
        assert_eq!(tracker.settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_export_snapshots_current_state() {
        let mut tracker = tracker();
        let mood = tracker.record_mood_at(Mood::Calm, "", 1, instant()).unwrap();
        let journal = tracker.record_journal_at("note", 1, instant()).unwrap();

        let profile = UserProfile {
            id: 1,
            email: "sam@example.com".to_string(),
            name: "sam".to_string(),
            joined_date: instant(),
        };
        let exported_at = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
        let bundle = tracker.export(profile.clone(), exported_at).unwrap();

        assert_eq!(bundle.user, profile);
        assert_eq!(bundle.export_date, exported_at);
        assert_eq!(bundle.moods, vec![mood]);
        assert_eq!(bundle.journals, vec![journal]);
        assert_eq!(bundle.settings, Settings::default());
    }

    #[test]
    fn test_load_outcome_distinguishes_fresh_store() {
        let tracker = tracker();
        assert!(tracker.load_moods().unwrap().was_recovered());
        assert!(tracker.load_journals().unwrap().was_recovered());
    }
}
