// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use catalog::MemoryStore;
use catalog_service::db::SqliteStore;
use catalog_service::state::AppState;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::Level;

// --- Isolated stores, one per test ---
pub fn memory_state() -> AppState {
  AppState::new(Arc::new(MemoryStore::new()))
}

pub async fn sqlite_state() -> AppState {
  let store = SqliteStore::connect("sqlite::memory:")
    .await
    .expect("in-memory sqlite store should open");
  AppState::new(Arc::new(store))
}

// --- Payload fixtures ---
pub fn notebook_payload() -> Value {
  json!({
    "name": "Notebook",
    "description": "A5 ruled",
    "price": "9.90",
    "available": true,
    "category": "HOUSEWARES",
  })
}

/// The notebook payload with some keys replaced.
pub fn payload_with(overrides: Value) -> Value {
  let mut payload = notebook_payload();
  if let (Some(target), Some(source)) = (payload.as_object_mut(), overrides.as_object()) {
    for (key, value) in source {
      target.insert(key.clone(), value.clone());
    }
  }
  payload
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
