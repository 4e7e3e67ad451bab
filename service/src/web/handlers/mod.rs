// service/src/web/handlers/mod.rs

pub mod admin_handlers;
pub mod page_handlers;
pub mod product_handlers;

use serde_json::{Map, Value};

/// Parses a request body as JSON. Empty, malformed or `null` bodies read as an
/// empty object so they fail payload validation like any incomplete product.
pub(crate) fn json_body(body: &[u8]) -> Value {
  match serde_json::from_slice::<Value>(body) {
    Ok(Value::Null) | Err(_) => Value::Object(Map::new()),
    Ok(value) => value,
  }
}
