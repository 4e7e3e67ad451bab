// service/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use catalog_service::config::AppConfig;
use catalog_service::state::AppState;
use catalog_service::{db, telemetry, web};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
  let app_config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
  telemetry::init_tracing(app_config.log_format);

  tracing::info!("Starting catalog server...");
  tracing::info!(database_url = %app_config.database_url, "Application configuration loaded.");

  let store = match db::build_store(&app_config).await {
    Ok(store) => store,
    Err(e) => {
      tracing::error!(error = %e, "Failed to open the product store.");
      return Err(io::Error::new(io::ErrorKind::Other, e));
    }
  };
  let app_state = actix_data::Data::new(AppState::new(store));

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(app_state.clone()) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
