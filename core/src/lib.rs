// src/lib.rs

//! Catalog: the product model and storage contract behind the catalog service.
//!
//! The crate provides:
//!  - `Product`, its closed `Category` and fixed-point `Price`.
//!  - Strict payload validation (`Product::from_payload`) that either yields a
//!    complete product or a single validation error.
//!  - `ProductFilter`, the conjunctive list filter built from query strings.
//!  - The `ProductStore` trait and an in-process `MemoryStore`.

pub mod error;
pub mod model;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{CatalogError, CatalogResult};
pub use crate::model::{parse_availability, Category, Price, Product, ProductFilter};
pub use crate::store::{MemoryStore, ProductStore};
