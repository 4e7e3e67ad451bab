// service/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use catalog::CatalogError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("{0}")]
  Validation(String),

  #[error("{0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  /// Store failures and domain misuse that the HTTP contract never expects.
  #[error("Catalog Error: {0}")]
  Catalog(CatalogError),
}

impl From<CatalogError> for AppError {
  fn from(err: CatalogError) -> Self {
    match err {
      CatalogError::Validation(message) => AppError::Validation(message),
      CatalogError::UnknownCategory(_) => AppError::Validation(err.to_string()),
      CatalogError::NotFound(_) => AppError::NotFound(err.to_string()),
      CatalogError::MissingId | CatalogError::Backend(_) => AppError::Catalog(err),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    match self {
      AppError::Validation(m) => {
        tracing::warn!(application_error = %self, "Rejecting request");
        HttpResponse::BadRequest().json(json!({"error": m}))
      }
      AppError::NotFound(m) => {
        tracing::warn!(application_error = %self, "Responding with not found");
        HttpResponse::NotFound().json(json!({"message": m}))
      }
      AppError::Config(m) => {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) => {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"}))
      }
      AppError::Catalog(source) => {
        tracing::error!(catalog_error = ?source, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred"}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
