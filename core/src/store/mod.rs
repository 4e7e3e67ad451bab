// catalog/src/store/mod.rs

//! Persistence seam for products.
//!
//! Handlers only see `Arc<dyn ProductStore>`, so each server or test builds
//! its own store and passes it in.

pub mod memory;

pub use memory::MemoryStore;

use crate::error::CatalogResult;
use crate::model::{Category, Product, ProductFilter};
use async_trait::async_trait;

/// Durable CRUD over products.
///
/// Every mutating call is committed before it returns. Sequences are ordered
/// by ascending id.
#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Persists `product` under a freshly assigned id, ignoring any id it carries.
  async fn create(&self, product: Product) -> CatalogResult<Product>;

  /// Overwrites every field of the stored record with the same id.
  ///
  /// Fails with `MissingId` when `product.id` is unset or `0`, and with
  /// `NotFound` when no such record exists.
  async fn update(&self, product: Product) -> CatalogResult<Product>;

  /// Removes the record if present. Deleting an absent id succeeds.
  async fn delete(&self, id: i64) -> CatalogResult<()>;

  async fn find(&self, id: i64) -> CatalogResult<Option<Product>>;

  async fn all(&self) -> CatalogResult<Vec<Product>>;

  /// Records matching every constraint in `filter`.
  async fn search(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>>;

  /// Deletes every record, returning how many were removed.
  async fn reset(&self) -> CatalogResult<u64>;

  async fn find_by_name(&self, name: &str) -> CatalogResult<Vec<Product>> {
    self
      .search(&ProductFilter {
        name: Some(name.to_string()),
        ..Default::default()
      })
      .await
  }

  /// `None` looks up uncategorised products (`Category::Unknown`).
  async fn find_by_category(&self, category: Option<Category>) -> CatalogResult<Vec<Product>> {
    self
      .search(&ProductFilter {
        category: Some(category.unwrap_or_default()),
        ..Default::default()
      })
      .await
  }

  /// `None` looks up available products.
  async fn find_by_availability(&self, available: Option<bool>) -> CatalogResult<Vec<Product>> {
    self
      .search(&ProductFilter {
        available: Some(available.unwrap_or(true)),
        ..Default::default()
      })
      .await
  }
}

/// Resolves the id `update` should write to, rejecting unsaved products.
pub fn persisted_id(product: &Product) -> CatalogResult<i64> {
  match product.id {
    Some(id) if id != 0 => Ok(id),
    _ => Err(crate::error::CatalogError::MissingId),
  }
}
