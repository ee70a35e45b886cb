//! Legacy column-layout store.
//!
//! Before column assignments lived in `layout.twoColumnLeft/Right`, they were
//! persisted separately per template. The store is still read as a fallback
//! when a config carries no assignment, and every column move is written back
//! so older clients keep seeing the same layout.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::template_config::ColumnItem;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("legacy layout store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("legacy layout store holds invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("legacy layout store lock poisoned")]
    Poisoned,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyColumnLayout {
    #[serde(default)]
    pub left: Vec<ColumnItem>,
    #[serde(default)]
    pub right: Vec<ColumnItem>,
}

pub trait ColumnLayoutStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<LegacyColumnLayout>, StoreError>;
    fn save(&self, key: &str, layout: &LegacyColumnLayout) -> Result<(), StoreError>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MemoryStore {
    layouts: RwLock<HashMap<String, LegacyColumnLayout>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColumnLayoutStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<LegacyColumnLayout>, StoreError> {
        let layouts = self.layouts.read().map_err(|_| StoreError::Poisoned)?;
        Ok(layouts.get(key).cloned())
    }

    fn save(&self, key: &str, layout: &LegacyColumnLayout) -> Result<(), StoreError> {
        let mut layouts = self.layouts.write().map_err(|_| StoreError::Poisoned)?;
        layouts.insert(key.to_string(), layout.clone());
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JSON file
// ────────────────────────────────────────────────────────────────────────────

/// All layouts in one JSON object keyed by store key. Writes go through a
/// sibling temp file and a rename.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<HashMap<String, LegacyColumnLayout>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(HashMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No legacy layout file at {}", self.path.display());
                Ok(HashMap::new())
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl ColumnLayoutStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<LegacyColumnLayout>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, layout: &LegacyColumnLayout) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut layouts = self.read_all()?;
        layouts.insert(key.to_string(), layout.clone());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&layouts)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Async access
// ────────────────────────────────────────────────────────────────────────────

/// Loads the layout for `key` on the blocking pool. An unreadable store counts
/// as "no legacy layout".
pub async fn load_blocking(
    store: Arc<dyn ColumnLayoutStore>,
    key: &'static str,
) -> Option<LegacyColumnLayout> {
    match tokio::task::spawn_blocking(move || store.load(key)).await {
        Ok(Ok(layout)) => layout,
        Ok(Err(err)) => {
            warn!("Ignoring unreadable legacy column layout for {key}: {err}");
            None
        }
        Err(err) => {
            warn!("Legacy column layout load for {key} did not finish: {err}");
            None
        }
    }
}

/// Saves on the blocking pool. Failures are logged and otherwise ignored.
pub async fn save_blocking(
    store: Arc<dyn ColumnLayoutStore>,
    key: &'static str,
    layout: LegacyColumnLayout,
) {
    match tokio::task::spawn_blocking(move || store.save(key, &layout)).await {
        Ok(Ok(())) => debug!("Saved legacy column layout for {key}"),
        Ok(Err(err)) => warn!("Failed to write legacy column layout for {key}: {err}"),
        Err(err) => warn!("Legacy column layout save for {key} did not finish: {err}"),
    }
}
