use std::fs;
use std::path::{Path, PathBuf};

/// Name of the data directory holding the JSON store
pub const DATA_DIR_NAME: &str = ".tido";

/// Error type for data directory discovery and setup
#[derive(Debug, thiserror::Error)]
pub enum DataDirError {
    #[error("no .tido/ directory found (run `td init` first)")]
    NotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discover the data directory by walking up from `start` looking for
/// a `.tido/` subdirectory.
pub fn discover(start: &Path) -> Result<PathBuf, DataDirError> {
    let mut current = start.to_path_buf();
    loop {
        let data_dir = current.join(DATA_DIR_NAME);
        if data_dir.is_dir() {
            return Ok(data_dir);
        }
        if !current.pop() {
            return Err(DataDirError::NotFound);
        }
    }
}

/// Create the data directory under `root`. Idempotent.
pub fn init(root: &Path) -> Result<PathBuf, DataDirError> {
    let data_dir = root.join(DATA_DIR_NAME);
    fs::create_dir_all(&data_dir)?;
    Ok(data_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn discover_finds_dir_in_start() {
        let tmp = TempDir::new().unwrap();
        let created = init(tmp.path()).unwrap();
        let found = discover(tmp.path()).unwrap();
        assert_eq!(found, created);
    }

    #[test]
    fn discover_walks_up_to_parent() {
        let tmp = TempDir::new().unwrap();
        init(tmp.path()).unwrap();
        let nested = tmp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        let found = discover(&nested).unwrap();
        assert_eq!(found, tmp.path().join(DATA_DIR_NAME));
    }

    #[test]
    fn discover_fails_when_absent() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(discover(tmp.path()), Err(DataDirError::NotFound)));
    }

    #[test]
    fn init_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        init(tmp.path()).unwrap();
        init(tmp.path()).unwrap();
        assert!(tmp.path().join(DATA_DIR_NAME).is_dir());
    }
}
