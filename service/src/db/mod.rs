// service/src/db/mod.rs

//! Store construction and the SQLite-backed `ProductStore`.

pub mod sqlite_store;

pub use sqlite_store::SqliteStore;

use crate::config::AppConfig;
use crate::errors::Result;
use catalog::{MemoryStore, ProductStore};
use std::sync::Arc;

/// Opens the store selected by `DATABASE_URL` and makes sure its schema exists.
pub async fn build_store(config: &AppConfig) -> Result<Arc<dyn ProductStore>> {
  if config.uses_memory_store() {
    tracing::info!("Using in-process product store.");
    return Ok(Arc::new(MemoryStore::new()));
  }

  let store = SqliteStore::connect(&config.database_url).await?;
  tracing::info!("Successfully connected to the database.");
  Ok(Arc::new(store))
}
