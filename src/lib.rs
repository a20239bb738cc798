/*!
# youmatter

The local data and analytics engine for a personal wellbeing tracker. Users
log discrete mood observations and free-text journal entries; the engine owns
those records and derives aggregate insight from them: engagement streaks,
mood-frequency trends, writing statistics, and a complete export bundle.

Screen rendering, navigation, sign-in, and settings UI are external
collaborators that call into this engine and render its results. The engine
operates on a single local history for one user at a time, read and written
synchronously; its only boundary is an injected key-value persistence port.

## Core Features

- Record mood observations (eight recognized categories, optional notes)
- Save and delete free-text journal entries with frozen word counts
- Consecutive-day engagement streaks, capped at 30 days
- Mood frequency ranking over a trailing window
- Writing statistics, case-insensitive search, recent-entry selection
- A portable JSON export bundle of profile, settings, and both histories

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `storage`: the injected persistence port and its implementations
- `store`: generic load/append/remove semantics over ordered entry lists
- `model`: domain records (moods, journal entries, settings, profile)
- `tracker`: the domain layer the UI calls
- `analytics`: pure derived metrics over entry slices
- `export`: export bundle assembly
- `errors`: error handling infrastructure

## Usage Example

```rust
use youmatter::analytics;
use youmatter::model::Mood;
use youmatter::storage::MemoryStorage;
use youmatter::tracker::Tracker;

fn main() -> youmatter::AppResult<()> {
    let mut tracker = Tracker::new(MemoryStorage::new());

    tracker.record_mood(Mood::Calm, "quiet evening", 1)?;
    tracker.record_journal("Wrote a little today.", 1)?;

    let moods = tracker.moods()?;
    let journals = tracker.journals()?;
    let anchor = moods[0].date.date_naive();
    let streak = analytics::streak_days(&moods, &journals, anchor);
    assert_eq!(streak, 1);
    Ok(())
}
```
*/

/// Pure derived metrics over entry histories
pub mod analytics;
/// Centralized constants (storage keys, caps, window sizes)
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Export bundle assembly and serialization
pub mod export;
/// Domain records and the mood category enum
pub mod model;
/// Key-value persistence port and implementations
pub mod storage;
/// Generic persistence over ordered entry lists
pub mod store;
/// The domain layer: typed CRUD over mood and journal histories
pub mod tracker;

// Re-export important types for convenience
pub use errors::{AppError, AppResult, StorageError, ValidationError};
pub use export::ExportBundle;
pub use model::{JournalEntry, Mood, MoodEntry, Settings, UserProfile};
pub use storage::{DirStorage, MemoryStorage, StoragePort};
pub use tracker::Tracker;
