//! Key registry store.
//!
//! Maps key strings to their records. All mutations go through this type and are
//! persisted before they return, so both the validation endpoint and the admin
//! commands observe the same state and never acknowledge an unsaved change.

use std::{collections::BTreeMap, path::PathBuf, sync::Arc};
use tokio::sync::RwLock;

use crate::server::{data::document::JsonDocument, error::AppError, model::key::KeyRecord};

type KeyMap = BTreeMap<String, KeyRecord>;

/// Shared handle to the key registry.
///
/// Cheap to clone; clones share the same map and document.
#[derive(Clone)]
pub struct KeyStore {
    keys: Arc<RwLock<KeyMap>>,
    document: Arc<JsonDocument<KeyMap>>,
}

impl KeyStore {
    /// Loads the registry from `path`, starting empty when the file is absent.
    ///
    /// # Returns
    /// - `Ok(KeyStore)` - Loaded store
    /// - `Err(AppError)` - Document unreadable or corrupt; fatal at startup
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let document = JsonDocument::new(path);
        let keys: KeyMap = document.load().await?;

        tracing::info!(
            "Loaded {} keys from {}",
            keys.len(),
            document.path().display()
        );

        Ok(Self {
            keys: Arc::new(RwLock::new(keys)),
            document: Arc::new(document),
        })
    }

    /// Writes the whole registry to disk.
    pub async fn save(&self) -> Result<(), AppError> {
        let keys = self.keys.read().await;
        self.document.save(&keys).await
    }

    pub async fn get(&self, key: &str) -> Option<KeyRecord> {
        self.keys.read().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.keys.read().await.len()
    }

    /// Inserts or replaces a record and persists the registry.
    ///
    /// An existing record under the same key is overwritten without warning.
    pub async fn set(&self, key: &str, record: KeyRecord) -> Result<(), AppError> {
        let mut keys = self.keys.write().await;
        let previous = keys.insert(key.to_string(), record);

        if let Err(e) = self.document.save(&keys).await {
            restore(&mut keys, key, previous);
            return Err(e);
        }

        Ok(())
    }

    /// Removes a record and persists the registry.
    ///
    /// # Returns
    /// - `Ok(Some(record))` - Record removed and registry saved
    /// - `Ok(None)` - No such key, nothing written
    /// - `Err(AppError)` - Save failed, record kept
    pub async fn delete(&self, key: &str) -> Result<Option<KeyRecord>, AppError> {
        let mut keys = self.keys.write().await;
        let Some(removed) = keys.remove(key) else {
            return Ok(None);
        };

        if let Err(e) = self.document.save(&keys).await {
            keys.insert(key.to_string(), removed);
            return Err(e);
        }

        Ok(Some(removed))
    }

    /// Runs a read-modify-write against a single record under the write lock.
    ///
    /// `f` receives the record, if present, and may change it in place. The registry
    /// is saved only when the record actually changed, and other operations cannot
    /// interleave between the read and the save.
    ///
    /// # Arguments
    /// - `key` - Key string to operate on
    /// - `f` - Closure inspecting and optionally mutating the record
    ///
    /// # Returns
    /// - `Ok(R)` - Value returned by `f`, with any change persisted
    /// - `Err(AppError)` - Error returned by `f` (no change kept) or save failure
    pub async fn update<R, F>(&self, key: &str, f: F) -> Result<R, AppError>
    where
        F: FnOnce(Option<&mut KeyRecord>) -> Result<R, AppError>,
    {
        let mut keys = self.keys.write().await;
        let before = keys.get(key).cloned();

        let result = match f(keys.get_mut(key)) {
            Ok(result) => result,
            Err(e) => {
                restore(&mut keys, key, before);
                return Err(e);
            }
        };

        if keys.get(key) != before.as_ref() {
            if let Err(e) = self.document.save(&keys).await {
                restore(&mut keys, key, before);
                return Err(e);
            }
        }

        Ok(result)
    }
}

fn restore(keys: &mut KeyMap, key: &str, previous: Option<KeyRecord>) {
    match previous {
        Some(record) => {
            keys.insert(key.to_string(), record);
        }
        None => {
            keys.remove(key);
        }
    }
}
