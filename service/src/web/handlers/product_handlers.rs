// service/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use catalog::{CatalogError, Product, ProductFilter};
use tracing::{info, instrument, warn};

use super::json_body;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListProductsQuery {
  pub name: Option<String>,
  pub category: Option<String>,
  pub available: Option<String>,
}

impl ListProductsQuery {
  /// Reads the list filters from a raw query string. A repeated key keeps its
  /// first value and unknown keys are ignored.
  pub fn parse(query_string: &str) -> Result<Self, AppError> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(query_string)
      .map_err(|e| AppError::Validation(format!("Invalid query string: {}", e)))?
      .into_inner();

    let mut query = Self::default();
    for (key, value) in pairs {
      let slot = match key.as_str() {
        "name" => &mut query.name,
        "category" => &mut query.category,
        "available" => &mut query.available,
        _ => continue,
      };
      if slot.is_none() {
        *slot = Some(value);
      }
    }
    Ok(query)
  }
}

fn not_found(product_id: i64) -> AppError {
  warn!("Product with ID {} not found.", product_id);
  AppError::from(CatalogError::NotFound(product_id))
}

#[instrument(name = "handler::create_product", skip(app_state, body))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let product = Product::from_payload(&json_body(&body))?;
  info!("Creating product {}.", product.name);

  let created = app_state.store.create(product).await?;
  Ok(HttpResponse::Created().json(created))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.store.find(product_id).await? {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => Err(not_found(product_id)),
  }
}

#[instrument(name = "handler::update_product", skip(app_state, path, body), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  // Existence is checked before the body is looked at.
  let mut product = app_state
    .store
    .find(product_id)
    .await?
    .ok_or_else(|| not_found(product_id))?;

  product.apply_payload(&json_body(&body))?;
  product.id = Some(product_id);
  info!("Updating product {}.", product.name);

  let updated = app_state.store.update(product).await?;
  Ok(HttpResponse::Ok().json(updated))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  app_state.store.delete(path.into_inner()).await?;
  Ok(HttpResponse::NoContent().finish())
}

#[instrument(name = "handler::list_products", skip(app_state, req), fields(query = %req.query_string()))]
pub async fn list_products_handler(app_state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
  let query_params = ListProductsQuery::parse(req.query_string())?;
  let filter = ProductFilter::from_query(
    query_params.name.as_deref(),
    query_params.category.as_deref(),
    query_params.available.as_deref(),
  )?;

  let products = app_state.store.search(&filter).await?;
  info!("Listing {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}
