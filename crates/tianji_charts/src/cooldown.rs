//! Cooldown lock storage.
//!
//! A lock is a creation timestamp stored under a string key. The store only
//! persists timestamps; expiry is decided by the reader against an injected
//! "now" (see [`lock_active`]).

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::TimeDelta;
use tracing::debug;

use tianji_calendar::CivilDateTime;

use crate::error::ChartError;

/// Default lock lifetime.
pub const DEFAULT_COOLDOWN_HOURS: u32 = 6;

/// Key-value store of lock creation timestamps.
pub trait CooldownStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<CivilDateTime>, ChartError>;
    fn set(&self, key: &str, created: CivilDateTime) -> Result<(), ChartError>;
    fn delete(&self, key: &str) -> Result<(), ChartError>;
}

impl<S: CooldownStore + ?Sized> CooldownStore for &S {
    fn get(&self, key: &str) -> Result<Option<CivilDateTime>, ChartError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, created: CivilDateTime) -> Result<(), ChartError> {
        (**self).set(key, created)
    }

    fn delete(&self, key: &str) -> Result<(), ChartError> {
        (**self).delete(key)
    }
}

impl<S: CooldownStore + ?Sized> CooldownStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<CivilDateTime>, ChartError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, created: CivilDateTime) -> Result<(), ChartError> {
        (**self).set(key, created)
    }

    fn delete(&self, key: &str) -> Result<(), ChartError> {
        (**self).delete(key)
    }
}

/// Whether a lock created at `created` still holds at `now`.
///
/// Active while strictly less than `cooldown` has elapsed.
pub fn lock_active(created: CivilDateTime, now: CivilDateTime, cooldown: TimeDelta) -> bool {
    now.naive() - created.naive() < cooldown
}

fn lock_poisoned() -> ChartError {
    ChartError::Store("cooldown store lock poisoned".to_string())
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct InMemoryCooldownStore {
    entries: Mutex<HashMap<String, CivilDateTime>>,
}

impl InMemoryCooldownStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, HashMap<String, CivilDateTime>>, ChartError> {
        self.entries.lock().map_err(|_| lock_poisoned())
    }
}

impl CooldownStore for InMemoryCooldownStore {
    fn get(&self, key: &str) -> Result<Option<CivilDateTime>, ChartError> {
        Ok(self.entries()?.get(key).copied())
    }

    fn set(&self, key: &str, created: CivilDateTime) -> Result<(), ChartError> {
        self.entries()?.insert(key.to_string(), created);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), ChartError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object of key → timestamp on disk.
///
/// Every operation re-reads the file, so separate processes sharing the path
/// see each other's locks. Writes replace the whole file.
#[derive(Debug)]
pub struct JsonFileCooldownStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl JsonFileCooldownStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, CivilDateTime>, ChartError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &BTreeMap<String, CivilDateTime>) -> Result<(), ChartError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl CooldownStore for JsonFileCooldownStore {
    fn get(&self, key: &str) -> Result<Option<CivilDateTime>, ChartError> {
        let _guard = self.guard.lock().map_err(|_| lock_poisoned())?;
        Ok(self.load()?.get(key).copied())
    }

    fn set(&self, key: &str, created: CivilDateTime) -> Result<(), ChartError> {
        let _guard = self.guard.lock().map_err(|_| lock_poisoned())?;
        let mut entries = self.load()?;
        entries.insert(key.to_string(), created);
        self.save(&entries)?;
        debug!(key, path = %self.path.display(), "stored cooldown lock");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), ChartError> {
        let _guard = self.guard.lock().map_err(|_| lock_poisoned())?;
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
