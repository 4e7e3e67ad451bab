// catalog/src/error.rs
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
  /// Client-supplied payload could not be turned into a valid product.
  #[error("{0}")]
  Validation(String),

  #[error("Invalid category '{0}'")]
  UnknownCategory(String),

  /// `update` was called on a product that was never persisted.
  #[error("Update called with no id")]
  MissingId,

  #[error("Product with id '{0}' was not found.")]
  NotFound(i64),

  /// The persistence backend failed or returned data that cannot be decoded.
  #[error("Store backend error: {0}")]
  Backend(String),
}

impl CatalogError {
  pub fn validation(message: impl Into<String>) -> Self {
    CatalogError::Validation(message.into())
  }

  pub fn backend(err: impl std::fmt::Display) -> Self {
    CatalogError::Backend(err.to_string())
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
