//! Session-scoped key/value storage backends.
//! The session store persists two entries (raw token and overlay JSON) through
//! this seam so embedders can choose the lifetime: `MemoryStorage` lives and
//! dies with its owner (the tab-scoped case), `FileStorage` survives process
//! restarts and backs the CLI.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use parking_lot::RwLock;

pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Purely in-memory storage. Each instance is independent, so two stores built
/// on two `MemoryStorage` instances never observe each other's session.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self { Self::default() }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// Storage persisted as a single JSON object on disk. The whole map is
/// rewritten after every mutation; the files involved are a handful of short
/// strings so this stays cheap.
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or create) the storage file at `path`. A missing file yields an
    /// empty store; a corrupt file is an error so a broken session is never
    /// silently half-loaded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading session file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing session file {}", path.display()))?
        } else {
            HashMap::new()
        };
        Ok(Self { path, entries: RwLock::new(entries) })
    }

    fn flush(&self) {
        let entries = self.entries.read();
        match serde_json::to_string_pretty(&*entries) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    tracing::warn!("failed to write session file {}: {}", self.path.display(), e);
                }
            }
            Err(e) => tracing::warn!("failed to serialize session entries: {}", e),
        }
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&self, key: &str) {
        let removed = self.entries.write().remove(key).is_some();
        if removed {
            self.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip() {
        let s = MemoryStorage::new();
        assert_eq!(s.get("k"), None);
        s.set("k", "v");
        assert_eq!(s.get("k"), Some("v".to_string()));
        s.remove("k");
        assert_eq!(s.get("k"), None);
    }

    #[test]
    fn memory_storage_instances_are_independent() {
        let a = MemoryStorage::new();
        let b = MemoryStorage::new();
        a.set("k", "v");
        assert_eq!(b.get("k"), None);
    }

    #[test]
    fn file_storage_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        {
            let s = FileStorage::open(&path).unwrap();
            s.set("token", "abc");
            s.set("user", "{}");
        }
        let s = FileStorage::open(&path).unwrap();
        assert_eq!(s.get("token"), Some("abc".to_string()));
        s.remove("token");
        let s2 = FileStorage::open(&path).unwrap();
        assert_eq!(s2.get("token"), None);
        assert_eq!(s2.get("user"), Some("{}".to_string()));
    }

    #[test]
    fn file_storage_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(FileStorage::open(&path).is_err());
    }
}
