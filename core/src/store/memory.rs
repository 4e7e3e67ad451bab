// catalog/src/store/memory.rs

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Product, ProductFilter};
use crate::store::{persisted_id, ProductStore};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

#[derive(Debug)]
struct Inner {
  rows: BTreeMap<i64, Product>,
  next_id: i64,
}

/// In-process store backed by an ordered map.
///
/// Ids start at 1 and are never handed out twice, not even after `reset`.
#[derive(Debug)]
pub struct MemoryStore {
  inner: RwLock<Inner>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self {
      inner: RwLock::new(Inner {
        rows: BTreeMap::new(),
        next_id: 1,
      }),
    }
  }

  pub fn len(&self) -> usize {
    self.inner.read().rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Default for MemoryStore {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl ProductStore for MemoryStore {
  #[instrument(name = "MemoryStore::create", skip_all, fields(name = %product.name))]
  async fn create(&self, mut product: Product) -> CatalogResult<Product> {
    let mut guard = self.inner.write();
    let id = guard.next_id;
    guard.next_id += 1;
    product.id = Some(id);
    guard.rows.insert(id, product.clone());
    info!(product_id = id, "Created product.");
    Ok(product)
  }

  #[instrument(name = "MemoryStore::update", skip_all, fields(name = %product.name))]
  async fn update(&self, product: Product) -> CatalogResult<Product> {
    let id = persisted_id(&product)?;
    let mut guard = self.inner.write();
    match guard.rows.get_mut(&id) {
      Some(row) => {
        *row = product.clone();
        info!(product_id = id, "Updated product.");
        Ok(product)
      }
      None => Err(CatalogError::NotFound(id)),
    }
  }

  #[instrument(name = "MemoryStore::delete", skip(self))]
  async fn delete(&self, id: i64) -> CatalogResult<()> {
    if self.inner.write().rows.remove(&id).is_some() {
      info!(product_id = id, "Deleted product.");
    } else {
      debug!(product_id = id, "Delete of absent product ignored.");
    }
    Ok(())
  }

  async fn find(&self, id: i64) -> CatalogResult<Option<Product>> {
    Ok(self.inner.read().rows.get(&id).cloned())
  }

  async fn all(&self) -> CatalogResult<Vec<Product>> {
    Ok(self.inner.read().rows.values().cloned().collect())
  }

  async fn search(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>> {
    let guard = self.inner.read();
    Ok(guard.rows.values().filter(|p| filter.matches(p)).cloned().collect())
  }

  #[instrument(name = "MemoryStore::reset", skip(self))]
  async fn reset(&self) -> CatalogResult<u64> {
    let mut guard = self.inner.write();
    let removed = guard.rows.len() as u64;
    guard.rows.clear();
    info!(removed, "Removed all products.");
    Ok(removed)
  }
}
