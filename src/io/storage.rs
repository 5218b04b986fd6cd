use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// Storage key for the persisted todo list
pub const TODOS_KEY: &str = "todos";
/// Storage key for the persisted category list
pub const CATEGORIES_KEY: &str = "todo-categories";

/// Error type for storage writes (reads degrade to `None` instead)
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not write key '{key}': {source}")]
    WriteFailed {
        key: String,
        source: std::io::Error,
    },
}

/// Minimal key-value interface over the local persistent store.
///
/// Mirrors the semantics of browser local storage: string keys, string
/// values, full-document overwrite on every write. A missing or unreadable
/// key reads as `None` so startup never fails on bad data.
pub trait Storage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage: each key lives in `<dir>/<key>.json`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> FileStorage {
        FileStorage { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    /// Write via temp file + rename so a crash never leaves a torn document
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let wrap = |source| StorageError::WriteFailed {
            key: key.to_string(),
            source,
        };
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(wrap)?;
        tmp.write_all(value.as_bytes()).map_err(wrap)?;
        tmp.flush().map_err(wrap)?;
        tmp.persist(self.key_path(key)).map_err(|e| wrap(e.error))?;
        Ok(())
    }
}

/// In-memory storage fake for tests
#[derive(Debug, Default)]
pub struct MemStorage {
    map: HashMap<String, String>,
}

impl MemStorage {
    pub fn new() -> MemStorage {
        MemStorage::default()
    }

    /// Pre-seed a key (test setup)
    pub fn with(mut self, key: &str, value: &str) -> MemStorage {
        self.map.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_read_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.read("todos"), None);
    }

    #[test]
    fn file_storage_write_then_read() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.write("todos", "[]").unwrap();
        assert_eq!(storage.read("todos"), Some("[]".to_string()));
        assert!(dir.path().join("todos.json").exists());
    }

    #[test]
    fn file_storage_overwrites_whole_document() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.write("todo-categories", "[\"Personal\"]").unwrap();
        storage.write("todo-categories", "[]").unwrap();
        assert_eq!(storage.read("todo-categories"), Some("[]".to_string()));
    }

    #[test]
    fn file_storage_write_to_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nope"));
        assert!(storage.write("todos", "[]").is_err());
    }

    #[test]
    fn mem_storage_round_trip() {
        let mut storage = MemStorage::new();
        assert_eq!(storage.read("todos"), None);
        storage.write("todos", "[1]").unwrap();
        assert_eq!(storage.read("todos"), Some("[1]".to_string()));
    }
}
