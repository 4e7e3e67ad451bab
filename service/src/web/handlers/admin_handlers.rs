// service/src/web/handlers/admin_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

/// Test-support endpoint: removes every product unconditionally.
#[instrument(name = "handler::reset_products", skip(app_state))]
pub async fn reset_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let removed = app_state.store.reset().await?;
  info!("Reset removed {} products.", removed);
  Ok(HttpResponse::Ok().finish())
}
