//! Key-value persistence port and its implementations.
//!
//! The engine never touches a global store directly; it is constructed with
//! an implementation of [`StoragePort`] (get/set/delete over string blobs),
//! which keeps persistence swappable and testable. Two implementations ship:
//!
//! - [`MemoryStorage`]: an in-memory map, used as a test double and for
//!   ephemeral sessions.
//! - [`DirStorage`]: a directory-backed store with one file per key, for
//!   durable single-user local state.
//!
//! All operations are synchronous and non-cancellable; there is no retry
//! policy because there is no concurrent writer.

use crate::constants::STORAGE_FILE_EXTENSION;
use crate::errors::StorageError;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The persistence boundary of the engine.
///
/// A keyed store of text blobs. `get` distinguishes "absent" (`Ok(None)`)
/// from "unreadable" (`Err`); callers treat absence as an empty history and
/// surface read failures.
pub trait StoragePort {
    /// Returns the blob stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::ReadFailed` if the key exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, overwriting any previous blob.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::WriteFailed` if the blob cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the blob stored under `key`. Absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DeleteFailed` if an existing blob cannot be removed.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage backed by a `HashMap`.
///
/// Never fails. Useful as a test double and for sessions that do not need to
/// outlive the process.
///
/// # Examples
///
/// ```
/// use youmatter::storage::{MemoryStorage, StoragePort};
///
/// let mut storage = MemoryStorage::new();
/// storage.set("key", "value").unwrap();
/// assert_eq!(storage.get("key").unwrap().as_deref(), Some("value"));
/// storage.delete("key").unwrap();
/// assert!(storage.get("key").unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory-backed storage with one file per key.
///
/// Each key maps to `<root>/<key>.json`. Writes overwrite the whole file
/// synchronously; they are not atomic across process crashes, which is
/// acceptable for a single-user local tool.
#[derive(Debug)]
pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    /// Opens (creating if necessary) the storage directory at `root`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StorageError::Unavailable {
            path: root.clone(),
            source,
        })?;
        debug!("Opened storage directory at {}", root.display());
        Ok(DirStorage { root })
    }

    /// The directory this store persists into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}{}", key, STORAGE_FILE_EXTENSION))
    }
}

impl StoragePort for DirStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value).map_err(|source| StorageError::WriteFailed {
            key: key.to_string(),
            source,
        })
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::DeleteFailed {
                key: key.to_string(),
                source,
            }),
        }
    }
}
