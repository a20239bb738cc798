//! Generic persistence over ordered entry lists.
//!
//! [`EntryStore`] layers list semantics on top of the raw key-value
//! [`StoragePort`]: each key holds a JSON array of entries in chronological
//! order (oldest first), and every mutation rewrites the whole blob for that
//! key. This is O(n) per mutation in total entry count, which is acceptable
//! at the expected scale of years of daily entries.
//!
//! Missing or malformed blobs never error out of a load; they recover to an
//! empty list tagged with a [`RecoveryReason`] so callers and tests can
//! detect silent data loss without changing the default behavior.

use crate::errors::StorageError;
use crate::storage::StoragePort;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// An entry that can live in an ordered stored list.
pub trait StoredEntry {
    /// The entry's unique identifier.
    fn id(&self) -> i64;
}

impl StoredEntry for crate::model::MoodEntry {
    fn id(&self) -> i64 {
        self.id
    }
}

impl StoredEntry for crate::model::JournalEntry {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Why a load produced an empty list instead of stored data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryReason {
    /// No blob was stored under the key.
    Missing,
    /// A blob was stored but could not be parsed; its content is abandoned.
    Malformed(String),
}

/// The result of loading an entry list.
///
/// `Loaded` carries a well-formed history. `Recovered` means the key was
/// absent or its blob was malformed and the engine fell back to an empty
/// list; the reason is kept so callers can distinguish a fresh store from
/// abandoned data.
///
/// # Examples
///
/// ```
/// use youmatter::model::MoodEntry;
/// use youmatter::storage::MemoryStorage;
/// use youmatter::store::{EntryStore, LoadOutcome};
///
/// let store = EntryStore::new(MemoryStorage::new());
/// let outcome: LoadOutcome<MoodEntry> = store.load("youmatter_moods").unwrap();
/// assert!(outcome.was_recovered());
/// assert!(outcome.into_entries().is_empty());
/// ```
#[derive(Debug)]
pub enum LoadOutcome<T> {
    /// The stored blob parsed cleanly.
    Loaded(Vec<T>),
    /// The key was absent or malformed; the history is empty.
    Recovered {
        /// Why the stored data was unusable.
        reason: RecoveryReason,
    },
}

impl<T> LoadOutcome<T> {
    /// Whether this load fell back to an empty list.
    pub fn was_recovered(&self) -> bool {
        matches!(self, LoadOutcome::Recovered { .. })
    }

    /// Unwraps into the entry list, empty when recovered.
    pub fn into_entries(self) -> Vec<T> {
        match self {
            LoadOutcome::Loaded(entries) => entries,
            LoadOutcome::Recovered { .. } => Vec::new(),
        }
    }
}

/// A keyed container of ordered entry lists backed by a [`StoragePort`].
#[derive(Debug)]
pub struct EntryStore<S: StoragePort> {
    storage: S,
}

impl<S: StoragePort> EntryStore<S> {
    /// Wraps a storage port.
    pub fn new(storage: S) -> Self {
        EntryStore { storage }
    }

    /// Loads the entry list stored under `key`.
    ///
    /// Absent keys and malformed blobs recover to an empty list (see
    /// [`LoadOutcome`]); malformed blobs are additionally logged at warn
    /// level since they indicate data loss.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only when the backing store itself fails to
    /// read, never for absent or malformed data.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<LoadOutcome<T>, StorageError> {
        match self.storage.get(key)? {
            None => {
                debug!("No data stored under key '{}'; starting empty", key);
                Ok(LoadOutcome::Recovered {
                    reason: RecoveryReason::Missing,
                })
            }
            Some(raw) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(entries) => {
                    debug!("Loaded {} entries from key '{}'", entries.len(), key);
                    Ok(LoadOutcome::Loaded(entries))
                }
                Err(e) => {
                    warn!(
                        "Stored data under key '{}' is malformed ({}); recovering with an empty history",
                        key, e
                    );
                    Ok(LoadOutcome::Recovered {
                        reason: RecoveryReason::Malformed(e.to_string()),
                    })
                }
            },
        }
    }

    /// Appends `entry` at the tail of the list under `key` and persists the
    /// full sequence back. Returns the new sequence.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or written.
    pub fn append<T>(&mut self, key: &str, entry: T) -> Result<Vec<T>, StorageError>
    where
        T: Serialize + DeserializeOwned + StoredEntry,
    {
        let mut entries = self.load(key)?.into_entries();
        entries.push(entry);
        self.persist(key, &entries)?;
        Ok(entries)
    }

    /// Removes the entry with the given id from the list under `key`,
    /// persists, and returns the result. A no-op (without error) when no
    /// entry has that id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or written.
    pub fn remove_by_id<T>(&mut self, key: &str, id: i64) -> Result<Vec<T>, StorageError>
    where
        T: Serialize + DeserializeOwned + StoredEntry,
    {
        let mut entries: Vec<T> = self.load(key)?.into_entries();
        let before = entries.len();
        entries.retain(|entry| entry.id() != id);
        if entries.len() == before {
            debug!("No entry with id {} under key '{}'", id, key);
        }
        self.persist(key, &entries)?;
        Ok(entries)
    }

    /// Loads a single record stored under `key`, falling back to its default
    /// when the key is absent or the blob is malformed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only when the backing store fails to read.
    pub fn load_record<T>(&self, key: &str) -> Result<T, StorageError>
    where
        T: DeserializeOwned + Default,
    {
        match self.storage.get(key)? {
            None => Ok(T::default()),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(record) => Ok(record),
                Err(e) => {
                    warn!(
                        "Stored record under key '{}' is malformed ({}); using defaults",
                        key, e
                    );
                    Ok(T::default())
                }
            },
        }
    }

    /// Persists a single record wholesale under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the write fails.
    pub fn save_record<T: Serialize>(&mut self, key: &str, record: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.storage.set(key, &raw)
    }

    /// Removes whatever is stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if an existing blob cannot be deleted.
    pub fn remove_key(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage.delete(key)
    }

    fn persist<T: Serialize>(&mut self, key: &str, entries: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entries).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.storage.set(key, &raw)
    }
}
