// catalog/src/model/product.rs

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Category, Price};
use serde::Serialize;
use serde_json::{Map, Value};

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 250;

/// A catalog item.
///
/// `id` is `None` until a store persists the product; after that it never
/// changes. Serializes to the flat wire shape
/// `{id, name, description, price, available, category}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
  pub id: Option<i64>,
  pub name: String,
  pub description: String,
  pub price: Price,
  pub available: bool,
  pub category: Category,
}

impl Product {
  pub fn new(
    name: impl Into<String>,
    description: impl Into<String>,
    price: Price,
    available: bool,
    category: Category,
  ) -> Self {
    Self {
      id: None,
      name: name.into(),
      description: description.into(),
      price,
      available,
      category,
    }
  }

  /// Validates a JSON payload into an unsaved product.
  ///
  /// Every field is required. Any `id` in the payload is ignored. The first
  /// problem found aborts the whole parse.
  pub fn from_payload(payload: &Value) -> CatalogResult<Self> {
    let obj = payload
      .as_object()
      .ok_or_else(|| CatalogError::validation("Invalid product: body must be a JSON object"))?;

    let name = required_str(obj, "name")?;
    if name.is_empty() {
      return Err(CatalogError::validation("Invalid product: name must not be empty"));
    }
    check_len("name", name, NAME_MAX_LEN)?;

    let description = required_str(obj, "description")?;
    check_len("description", description, DESCRIPTION_MAX_LEN)?;

    let price = match required(obj, "price")? {
      Value::String(s) => s.parse::<Price>()?,
      Value::Number(n) => n.to_string().parse::<Price>()?,
      other => return Err(type_error("price", "a decimal string or number", other)),
    };

    let available = match required(obj, "available")? {
      Value::Bool(b) => *b,
      _ => return Err(CatalogError::validation("Invalid type for boolean [available]")),
    };

    let category = match required(obj, "category")? {
      Value::String(s) => s
        .parse::<Category>()
        .map_err(|_| CatalogError::validation(format!("Invalid product: unknown category '{}'", s)))?,
      other => return Err(type_error("category", "a category name", other)),
    };

    Ok(Self {
      id: None,
      name: name.to_string(),
      description: description.to_string(),
      price,
      available,
      category,
    })
  }

  /// Overwrites every mutable field from `payload`, keeping `id`.
  /// Leaves `self` untouched when the payload is rejected.
  pub fn apply_payload(&mut self, payload: &Value) -> CatalogResult<()> {
    let parsed = Product::from_payload(payload)?;
    *self = Product { id: self.id, ..parsed };
    Ok(())
  }

  /// Field-wise equality that ignores `id`.
  pub fn same_fields(&self, other: &Product) -> bool {
    self.name == other.name
      && self.description == other.description
      && self.price == other.price
      && self.available == other.available
      && self.category == other.category
  }
}

fn required<'a>(obj: &'a Map<String, Value>, key: &str) -> CatalogResult<&'a Value> {
  obj
    .get(key)
    .ok_or_else(|| CatalogError::validation(format!("Invalid product: missing field '{}'", key)))
}

fn required_str<'a>(obj: &'a Map<String, Value>, key: &str) -> CatalogResult<&'a str> {
  match required(obj, key)? {
    Value::String(s) => Ok(s.as_str()),
    other => Err(type_error(key, "a string", other)),
  }
}

fn check_len(key: &str, value: &str, max: usize) -> CatalogResult<()> {
  if value.chars().count() > max {
    return Err(CatalogError::validation(format!(
      "Invalid product: {} is longer than {} characters",
      key, max
    )));
  }
  Ok(())
}

fn type_error(key: &str, expected: &str, got: &Value) -> CatalogError {
  let kind = match got {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  };
  CatalogError::validation(format!("Invalid product: {} must be {}, got {}", key, expected, kind))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn notebook() -> Value {
    json!({
      "name": "Notebook",
      "description": "A5 ruled",
      "price": "9.90",
      "available": true,
      "category": "HOUSEWARES",
    })
  }

  #[test]
  fn parses_valid_payload() {
    let product = Product::from_payload(&notebook()).unwrap();
    assert_eq!(product.id, None);
    assert_eq!(product.name, "Notebook");
    assert_eq!(product.price.to_string(), "9.90");
    assert!(product.available);
    assert_eq!(product.category, Category::Housewares);
  }

  #[test]
  fn payload_id_is_ignored() {
    let mut payload = notebook();
    payload["id"] = json!(42);
    assert_eq!(Product::from_payload(&payload).unwrap().id, None);
  }

  #[test]
  fn numeric_price_is_accepted() {
    let mut payload = notebook();
    payload["price"] = json!(12.5);
    assert_eq!(Product::from_payload(&payload).unwrap().price.to_string(), "12.50");
  }

  #[test]
  fn truthy_string_is_not_a_boolean() {
    let mut payload = notebook();
    payload["available"] = json!("yes");
    assert_eq!(
      Product::from_payload(&payload),
      Err(CatalogError::validation("Invalid type for boolean [available]"))
    );
  }

  #[test]
  fn category_must_match_exactly() {
    let mut payload = notebook();
    payload["category"] = json!("housewares");
    let err = Product::from_payload(&payload).unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
    assert!(err.to_string().contains("housewares"));
  }

  #[test]
  fn missing_and_mistyped_fields_are_rejected() {
    for key in ["name", "description", "price", "available", "category"] {
      let mut payload = notebook();
      payload.as_object_mut().unwrap().remove(key);
      let err = Product::from_payload(&payload).unwrap_err();
      assert!(err.to_string().contains(key), "{}: {}", key, err);
    }

    let mut payload = notebook();
    payload["name"] = json!(7);
    assert!(Product::from_payload(&payload).is_err());
    payload = notebook();
    payload["price"] = json!(true);
    assert!(Product::from_payload(&payload).is_err());
    assert!(Product::from_payload(&json!([])).is_err());
  }

  #[test]
  fn enforces_lengths() {
    let mut payload = notebook();
    payload["name"] = json!("");
    assert!(Product::from_payload(&payload).is_err());
    payload = notebook();
    payload["description"] = json!("x".repeat(DESCRIPTION_MAX_LEN + 1));
    assert!(Product::from_payload(&payload).is_err());
    payload["description"] = json!("x".repeat(DESCRIPTION_MAX_LEN));
    assert!(Product::from_payload(&payload).is_ok());
  }

  #[test]
  fn rejected_update_leaves_product_untouched() {
    let mut product = Product::from_payload(&notebook()).unwrap();
    product.id = Some(3);
    let before = product.clone();

    let mut bad = notebook();
    bad["description"] = json!("Updated");
    bad["category"] = json!("NOPE");
    assert!(product.apply_payload(&bad).is_err());
    assert_eq!(product, before);

    bad["category"] = json!("FOOD");
    product.apply_payload(&bad).unwrap();
    assert_eq!(product.id, Some(3));
    assert_eq!(product.description, "Updated");
    assert_eq!(product.category, Category::Food);
  }

  #[test]
  fn serializes_flat_wire_shape() {
    let mut product = Product::from_payload(&notebook()).unwrap();
    product.id = Some(1);
    assert_eq!(
      serde_json::to_value(&product).unwrap(),
      json!({
        "id": 1,
        "name": "Notebook",
        "description": "A5 ruled",
        "price": "9.90",
        "available": true,
        "category": "HOUSEWARES",
      })
    );
  }
}
