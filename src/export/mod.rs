//! Export bundle assembly and serialization.
//!
//! The export bundle is a portable snapshot of everything the engine owns
//! (mood history, journal history, settings) plus the read-only profile
//! context. Assembly is pure: writing the document to disk or triggering a
//! download is an external collaborator's responsibility.

use crate::constants::{DATE_FORMAT_ISO, EXPORT_FILE_PREFIX};
use crate::model::{JournalEntry, MoodEntry, Settings, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A complete, order-preserving snapshot of the user's data.
///
/// Serializes to a single JSON document with top-level fields `user`,
/// `exportDate`, `moods`, `journals`, and `settings`.
///
/// # Examples
///
/// ```
/// use youmatter::export::ExportBundle;
/// use youmatter::model::{Settings, UserProfile};
/// use chrono::{TimeZone, Utc};
///
/// let profile = UserProfile {
///     id: 1,
///     email: "sam@example.com".to_string(),
///     name: "sam".to_string(),
///     joined_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
/// };
/// let exported_at = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
/// let bundle = ExportBundle::assemble(
///     profile,
///     Settings::default(),
///     Vec::new(),
///     Vec::new(),
///     exported_at,
/// );
/// assert_eq!(bundle.file_name(), "youmatter-data-2024-03-05.json");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    /// The profile the snapshot belongs to.
    pub user: UserProfile,
    /// When the snapshot was taken.
    pub export_date: DateTime<Utc>,
    /// Full mood history in store order.
    pub moods: Vec<MoodEntry>,
    /// Full journal history in store order.
    pub journals: Vec<JournalEntry>,
    /// The settings in effect at export time.
    pub settings: Settings,
}

impl ExportBundle {
    /// Assembles a snapshot from its parts. Pure; no side effects, no I/O.
    pub fn assemble(
        user: UserProfile,
        settings: Settings,
        moods: Vec<MoodEntry>,
        journals: Vec<JournalEntry>,
        export_date: DateTime<Utc>,
    ) -> Self {
        ExportBundle {
            user,
            export_date,
            moods,
            journals,
            settings,
        }
    }

    /// Serializes the bundle as a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a previously exported document back into a bundle.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the document is not a valid bundle.
    pub fn from_json(document: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(document)
    }

    /// The conventional filename for this snapshot:
    /// `youmatter-data-<ISO date>.json`.
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}.json",
            EXPORT_FILE_PREFIX,
            self.export_date.format(DATE_FORMAT_ISO)
        )
    }
}
