//! JSON blob stores: get/set opaque JSON documents by key.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde_json::Value as JsonValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io failure: {0}")]
    Io(#[from] io::Error),

    #[error("malformed blob '{key}': {message}")]
    Malformed { key: String, message: String },

    #[error("store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub fn malformed(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Malformed {
            key: key.into(),
            message: message.to_string(),
        }
    }
}

/// Key/value JSON blob store.
///
/// Keys are application-defined paths (e.g. `tenant/<uuid>/accounts`); values
/// are opaque JSON documents. This is the entire storage contract the ledger
/// needs.
pub trait BlobStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StoreError>;
    fn put(&self, key: &str, value: JsonValue) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S> BlobStore for Arc<S>
where
    S: BlobStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: JsonValue) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-memory blob store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    inner: RwLock<HashMap<String, JsonValue>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for InMemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: JsonValue) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        map.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        map.remove(key);
        Ok(())
    }
}

/// File-backed blob store: one JSON document per key under a root directory.
///
/// Key segments (split on `/`) become path components; the leaf gets a
/// `.json` suffix.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in key.split('/') {
            path.push(segment);
        }
        path.set_extension("json");
        path
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StoreError> {
        let path = self.blob_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StoreError::malformed(key, e))
    }

    fn put(&self, key: &str, value: JsonValue) -> Result<(), StoreError> {
        let path = self.blob_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload =
            serde_json::to_vec_pretty(&value).map_err(|e| StoreError::malformed(key, e))?;
        fs::write(&path, payload)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.blob_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
