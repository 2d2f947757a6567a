//! Local persistence of the editor state.
//!
//! The whole state is written as one JSON snapshot under
//! [`STORAGE_ROOT_KEY`] after every change, overwriting the previous one.
//! Snapshots are wrapped in a versioned envelope:
//!
//! ```json
//! { "version": 1, "state": { "sections": [...], "currentSectionId": ..., "currentFormId": ... } }
//! ```

use crate::constants::{APP_DIR_NAME, SNAPSHOT_VERSION, STORAGE_ROOT_KEY};
use crate::error::{PersistError, PersistResult};
use crate::store::{FormStore, StateObserver};
use crate::types::FormsState;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

// ============================================================================
// Storage Backends
// ============================================================================

/// Key/value text storage.
pub trait Storage {
    fn read(&self, key: &str) -> PersistResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> PersistResult<()>;
    fn remove(&self, key: &str) -> PersistResult<()>;
}

/// One JSON file per key inside a directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<data dir>/order-forms`
    pub fn default_location() -> PersistResult<Self> {
        let base = dirs::data_dir().ok_or(PersistError::NoStorageDir)?;
        Ok(Self::new(base.join(APP_DIR_NAME)))
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> PersistResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> PersistResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let mut temp = tempfile::NamedTempFile::new_in(&self.dir)?;
        temp.write_all(value.as_bytes())?;
        temp.persist(self.path_for(key)).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> PersistResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// In-process storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> PersistResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> PersistResult<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PersistResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

// ============================================================================
// Snapshots
// ============================================================================

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    state: &'a FormsState,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

#[derive(Deserialize)]
struct Snapshot {
    state: FormsState,
}

/// Write `state` under the root key, replacing the previous snapshot.
pub fn save_state<S: Storage + ?Sized>(storage: &S, state: &FormsState) -> PersistResult<()> {
    let json = serde_json::to_string(&SnapshotRef {
        version: SNAPSHOT_VERSION,
        state,
    })?;
    storage.write(STORAGE_ROOT_KEY, &json)
}

/// Read the persisted state, `None` when nothing was saved yet.
pub fn load_state<S: Storage + ?Sized>(storage: &S) -> PersistResult<Option<FormsState>> {
    let Some(json) = storage.read(STORAGE_ROOT_KEY)? else {
        return Ok(None);
    };
    let probe: VersionProbe = serde_json::from_str(&json)?;
    if probe.version != SNAPSHOT_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: probe.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    let snapshot: Snapshot = serde_json::from_str(&json)?;
    Ok(Some(snapshot.state))
}

/// Persisted state, or the seed when there is none or it cannot be read.
pub fn load_or_seed<S: Storage + ?Sized>(storage: &S) -> FormsState {
    match load_state(storage) {
        Ok(Some(state)) => state,
        Ok(None) => {
            info!("No saved state, starting from the default sections");
            crate::seed::default_state()
        }
        Err(e) => {
            warn!("Failed to load saved state, starting from the default sections: {}", e);
            crate::seed::default_state()
        }
    }
}

/// Forget the persisted snapshot.
pub fn clear_state<S: Storage + ?Sized>(storage: &S) -> PersistResult<()> {
    storage.remove(STORAGE_ROOT_KEY)
}

// ============================================================================
// Store Integration
// ============================================================================

/// Observer that saves every new state.
pub struct Persister<S: Storage> {
    storage: S,
}

impl<S: Storage> Persister<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: Storage> StateObserver for Persister<S> {
    fn state_changed(&mut self, state: &FormsState) {
        if let Err(e) = save_state(&self.storage, state) {
            error!("Failed to persist state: {}", e);
        }
    }
}

/// Open a store backed by `storage`: load (or seed) and persist every change.
pub fn open_store<S: Storage + 'static>(storage: S) -> FormStore {
    let mut store = FormStore::new(load_or_seed(&storage));
    store.subscribe(Persister::new(storage));
    store
}
