use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// The four independently persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Accounts,
    Vacancies,
    Resumes,
    Applications,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Accounts => "accounts",
            Collection::Vacancies => "vacancies",
            Collection::Resumes => "resumes",
            Collection::Applications => "applications",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Accounts => "accounts.json",
            Collection::Vacancies => "vacancies.json",
            Collection::Resumes => "resumes.json",
            Collection::Applications => "applications.json",
        }
    }
}

/// Durable backing for serialized collections so the store can be exercised
/// without touching the filesystem.
pub trait CollectionStorage {
    /// Returns `Ok(None)` when nothing has been written for the collection yet.
    fn read(&self, collection: Collection) -> Result<Option<String>, StorageError>;
    /// Replaces the whole persisted collection.
    fn write(&self, collection: Collection, contents: &str) -> Result<(), StorageError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to encode {collection}: {source}")]
    Encode {
        collection: &'static str,
        source: serde_json::Error,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// One JSON file per collection inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }
}

impl CollectionStorage for JsonFileStorage {
    fn read(&self, collection: Collection) -> Result<Option<String>, StorageError> {
        let path = self.path_for(collection);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    fn write(&self, collection: Collection, contents: &str) -> Result<(), StorageError> {
        let path = self.path_for(collection);
        let staging = path.with_extension("json.tmp");

        fs::create_dir_all(&self.root).map_err(|source| StorageError::Write {
            path: self.root.clone(),
            source,
        })?;
        fs::write(&staging, contents).map_err(|source| StorageError::Write {
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, &path).map_err(|source| StorageError::Write { path, source })
    }
}

/// Reads a collection, degrading to `T::default()` when the file is missing,
/// unreadable or no longer matches the record shape.
pub(crate) fn load_or_default<S, T>(storage: &S, collection: Collection) -> T
where
    S: CollectionStorage + ?Sized,
    T: DeserializeOwned + Default,
{
    let contents = match storage.read(collection) {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            debug!(collection = collection.name(), "no stored data, starting empty");
            return T::default();
        }
        Err(err) => {
            warn!(collection = collection.name(), error = %err, "failed to read collection");
            return T::default();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                collection = collection.name(),
                error = %err,
                "stored collection is unreadable, treating as empty"
            );
            T::default()
        }
    }
}

pub(crate) fn encode<T>(collection: Collection, value: &T) -> Result<String, StorageError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string_pretty(value).map_err(|source| StorageError::Encode {
        collection: collection.name(),
        source,
    })
}
