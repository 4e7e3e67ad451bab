// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use catalog::{Category, Price, Product};
use once_cell::sync::Lazy;
use tracing::Level;

// --- Product fixtures ---
pub fn product(name: &str, available: bool, category: Category) -> Product {
  Product::new(
    name,
    format!("{} description", name),
    Price::from_cents(990).unwrap(),
    available,
    category,
  )
}

pub fn notebook() -> Product {
  product("Notebook", true, Category::Housewares)
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
