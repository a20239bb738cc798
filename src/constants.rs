//! Constants used throughout the engine.
//!
//! This module contains all constants used by the youmatter engine, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "youmatter";

// Storage Keys
/// Storage key under which the mood history blob is persisted.
pub const MOODS_KEY: &str = "youmatter_moods";
/// Storage key under which the journal history blob is persisted.
pub const JOURNALS_KEY: &str = "youmatter_journals";
/// Storage key under which the settings record is persisted.
pub const SETTINGS_KEY: &str = "youmatter_settings";
/// File extension used by the directory-backed storage implementation.
pub const STORAGE_FILE_EXTENSION: &str = ".json";

// Analytics Parameters
/// Maximum number of calendar days the streak walk will examine.
///
/// The streak value saturates at this bound even if the true streak is
/// longer. This is a documented limit, not an incidental loop bound.
pub const MAX_STREAK_DAYS: u32 = 30;
/// Trailing window, in days, used for mood frequency statistics.
pub const MOOD_WINDOW_DAYS: i64 = 7;
/// Number of entries shown by the journal view when not showing all.
pub const RECENT_JOURNAL_LIMIT: usize = 5;
/// Number of recent journal entries surfaced on the home view.
pub const HOME_RECENT_LIMIT: usize = 3;
/// Maximum characters of journal content shown in a preview card.
pub const PREVIEW_MAX_CHARS: usize = 100;

// Export
/// Prefix for the export artifact filename.
pub const EXPORT_FILE_PREFIX: &str = "youmatter-data";
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
