use crate::determinism::sha256_hex;
use crate::error::{ProfileError, ProfileResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Minimal fallible key-value surface the profile cache is written against.
/// Production injects a persistent store; tests use the in-memory one.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> ProfileResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ProfileResult<()>;
}

/// In-memory store. Last write wins.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ProfileResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| ProfileError::Store("memory store poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ProfileResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ProfileError::Store("memory store poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one file per key under a root directory. Keys carry
/// separator characters, so filenames are the key's SHA-256.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        FileStore {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.json", sha256_hex(key.as_bytes())))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> ProfileResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> ProfileResult<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
