//! Storage module for the flat-file gate-pass document.
//!
//! The JSON document is the source of truth. It is read in full before every
//! operation and rewritten in full after every mutation.

mod repository;
mod store;

pub use repository::*;
pub use store::*;

use std::path::Path;

use crate::errors::AppError;
use crate::models::Datastore;

/// Open the storage document, creating it with an empty collection if absent.
pub async fn init_store(db_path: &Path) -> Result<JsonFileStore, AppError> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let store = JsonFileStore::new(db_path);

    let exists = tokio::fs::try_exists(db_path)
        .await
        .map_err(|e| AppError::StorageRead(format!("Failed to stat {}: {}", db_path.display(), e)))?;

    if !exists {
        tracing::info!("Creating empty storage document at {}", db_path.display());
        store.save(&Datastore::default()).await?;
    }

    Ok(store)
}
