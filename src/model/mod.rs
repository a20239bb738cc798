//! Domain records for the wellbeing tracker.
//!
//! This module defines the entry types owned by the engine (mood observations
//! and journal entries), the user's preference flags, and the read-only
//! profile context supplied by the caller. All types serialize with camelCase
//! field names and RFC 3339 timestamps, matching the persisted blob layout
//! and the export document format.

use crate::errors::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of recognized mood categories.
///
/// Serialized as its lowercase name (`"happy"`, `"stressed"`, ...). The
/// declaration order is the canonical ranking order used to break frequency
/// ties deterministically.
///
/// # Examples
///
/// ```
/// use youmatter::model::Mood;
///
/// let mood: Mood = "calm".parse().unwrap();
/// assert_eq!(mood, Mood::Calm);
/// assert_eq!(mood.as_str(), "calm");
///
/// assert!("grumpy".parse::<Mood>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Feeling happy.
    Happy,
    /// Feeling sad.
    Sad,
    /// Feeling anxious.
    Anxious,
    /// Feeling angry.
    Angry,
    /// Feeling calm.
    Calm,
    /// Feeling excited.
    Excited,
    /// Feeling tired.
    Tired,
    /// Feeling stressed.
    Stressed,
}

impl Mood {
    /// All mood categories in canonical declaration order.
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Angry,
        Mood::Calm,
        Mood::Excited,
        Mood::Tired,
        Mood::Stressed,
    ];

    /// Returns the lowercase name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
            Mood::Calm => "calm",
            Mood::Excited => "excited",
            Mood::Tired => "tired",
            Mood::Stressed => "stressed",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    /// Parses a mood category name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownMood` if the string is not one of the
    /// eight recognized categories.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "anxious" => Ok(Mood::Anxious),
            "angry" => Ok(Mood::Angry),
            "calm" => Ok(Mood::Calm),
            "excited" => Ok(Mood::Excited),
            "tired" => Ok(Mood::Tired),
            "stressed" => Ok(Mood::Stressed),
            other => Err(ValidationError::UnknownMood(other.to_string())),
        }
    }
}

/// A single mood observation.
///
/// Immutable once created; the engine never edits a mood entry and exposes no
/// delete operation for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    /// Unique identifier, derived from the creation instant in milliseconds.
    pub id: i64,
    /// The recorded mood category.
    pub mood: Mood,
    /// Optional free-text notes; empty string when the user added none.
    #[serde(default)]
    pub notes: String,
    /// The instant the mood was recorded.
    pub date: DateTime<Utc>,
    /// Identifier of the owning user profile.
    pub user_id: i64,
}

/// A single free-text journal entry.
///
/// `word_count` is computed once at creation by splitting the trimmed content
/// on whitespace runs, and is never recomputed afterwards. Entries are
/// immutable, so the frozen count cannot go stale; if editing is ever added
/// the count must be recomputed on edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Unique identifier, derived from the creation instant in milliseconds.
    pub id: i64,
    /// The journal text, trimmed at creation; never empty.
    pub content: String,
    /// Whitespace-delimited token count of `content`, frozen at creation.
    pub word_count: usize,
    /// The instant the entry was saved.
    pub date: DateTime<Utc>,
    /// Identifier of the owning user profile.
    pub user_id: i64,
}

/// User preference flags.
///
/// Persisted wholesale on each change. Fields missing from a stored record
/// fall back to their defaults, so older blobs remain readable when flags are
/// added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Remind the user to check in daily.
    pub daily_reminders: bool,
    /// Remind the user to track their mood.
    pub mood_reminders: bool,
    /// Remind the user to write in their journal.
    pub journal_reminders: bool,
    /// Render the UI in dark mode.
    pub dark_mode: bool,
}

impl Default for Settings {
    /// All reminders enabled except journal reminders; dark mode off.
    fn default() -> Self {
        Settings {
            daily_reminders: true,
            mood_reminders: true,
            journal_reminders: false,
            dark_mode: false,
        }
    }
}

/// Read-only profile context supplied by the caller.
///
/// The engine never creates or mutates profiles; it only uses them to anchor
/// membership statistics and to label the export bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique identifier of the user.
    pub id: i64,
    /// The user's email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// The instant the user joined.
    pub joined_date: DateTime<Utc>,
}
