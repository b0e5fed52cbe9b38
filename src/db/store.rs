//! Storage abstraction and its JSON flat-file implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::Datastore;

/// Whole-document persistence for gate-pass requests.
///
/// There is no locking between `load` and `save`; concurrent writers race
/// and the last save wins.
#[async_trait]
pub trait GatePassStore: Send + Sync {
    /// Read and parse the full document.
    async fn load(&self) -> Result<Datastore, AppError>;

    /// Overwrite the document with `datastore`.
    async fn save(&self, datastore: &Datastore) -> Result<(), AppError>;
}

/// Stores the collection as a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GatePassStore for JsonFileStore {
    async fn load(&self) -> Result<Datastore, AppError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::StorageRead(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::StorageRead(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, datastore: &Datastore) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(datastore)
            .map_err(|e| AppError::StorageWrite(format!("Failed to serialize datastore: {}", e)))?;

        tokio::fs::write(&self.path, raw).await.map_err(|e| {
            AppError::StorageWrite(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

/// In-memory store used as a test double.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    datastore: std::sync::Mutex<Datastore>,
    fail_reads: bool,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn with_datastore(mut self, datastore: Datastore) -> Self {
        *self.datastore.get_mut().unwrap() = datastore;
        self
    }

    pub fn snapshot(&self) -> Datastore {
        self.datastore.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl GatePassStore for MemoryStore {
    async fn load(&self) -> Result<Datastore, AppError> {
        if self.fail_reads {
            return Err(AppError::StorageRead("simulated read failure".to_string()));
        }
        Ok(self.snapshot())
    }

    async fn save(&self, datastore: &Datastore) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::StorageWrite("simulated write failure".to_string()));
        }
        *self.datastore.lock().unwrap() = datastore.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("absent.json"));

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, AppError::StorageRead(_)));
    }

    #[tokio::test]
    async fn test_load_malformed_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gatepasses.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, AppError::StorageRead(_)));
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("no-such-dir").join("db.json"));

        let err = store.save(&Datastore::default()).await.unwrap_err();
        assert!(matches!(err, AppError::StorageWrite(_)));
    }

    #[tokio::test]
    async fn test_save_overwrites_with_pretty_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gatepasses.json");
        std::fs::write(&path, "stale contents that are longer than the new document").unwrap();

        let store = JsonFileStore::new(&path);
        store.save(&Datastore::default()).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\n  \"requests\": []\n}"
        );
        assert_eq!(store.load().await.unwrap(), Datastore::default());
    }
}
