//! JSON file preference store
//!
//! Keeps a flat `{ "key": "value" }` object on disk. A missing file reads as
//! empty; every write rewrites the whole file through a temporary sibling
//! and a rename. A write over unreadable content starts from an empty map,
//! so a corrupted file never blocks storing a new value.

use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use application::{error::ApplicationError, ports::PreferenceStorePort};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

type Preferences = BTreeMap<String, String>;

/// File-backed implementation of [`PreferenceStorePort`]
#[derive(Debug)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFilePreferenceStore {
    /// Create a store backed by the file at `path`
    ///
    /// The file is not touched until the first read or write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Preferences, ApplicationError> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Preferences::new()),
            Err(e) => {
                return Err(ApplicationError::Internal(format!(
                    "Failed to read preferences from {}: {e}",
                    self.path.display()
                )));
            },
        };

        if data.trim().is_empty() {
            return Ok(Preferences::new());
        }

        serde_json::from_str(&data).map_err(|e| {
            ApplicationError::Internal(format!(
                "Malformed preferences file {}: {e}",
                self.path.display()
            ))
        })
    }

    async fn write_all(&self, prefs: &Preferences) -> Result<(), ApplicationError> {
        let json = serde_json::to_string_pretty(prefs)
            .map_err(|e| ApplicationError::Internal(format!("Failed to encode preferences: {e}")))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                ApplicationError::Internal(format!(
                    "Failed to create preferences directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await.map_err(|e| {
            ApplicationError::Internal(format!("Failed to write {}: {e}", tmp.display()))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            ApplicationError::Internal(format!(
                "Failed to replace {}: {e}",
                self.path.display()
            ))
        })
    }
}

#[async_trait]
impl PreferenceStorePort for JsonFilePreferenceStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let prefs = self.read_all().await?;
        Ok(prefs.get(key).cloned())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        let _guard = self.write_lock.lock().await;
        let mut prefs = self.read_all().await.unwrap_or_else(|e| {
            warn!(error = %e, "Discarding unreadable preferences before write");
            Preferences::new()
        });
        prefs.insert(key.to_string(), value.to_string());
        self.write_all(&prefs).await?;
        debug!("Preference stored");
        Ok(())
    }
}
