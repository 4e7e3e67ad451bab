// catalog/src/model/filter.rs

use crate::error::CatalogResult;
use crate::model::{Category, Product};

const TRUTHY: [&str; 4] = ["true", "1", "yes", "y"];

/// Conjunctive equality filter over products. `None` fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
  pub name: Option<String>,
  pub category: Option<Category>,
  pub available: Option<bool>,
}

impl ProductFilter {
  /// Builds a filter from raw query-string values.
  ///
  /// Empty `name`/`category` values are ignored. `category` is upper-cased and
  /// must then name a category. `available` never fails: anything outside the
  /// truthy set reads as `false`, including an empty value.
  pub fn from_query(name: Option<&str>, category: Option<&str>, available: Option<&str>) -> CatalogResult<Self> {
    let name = name.filter(|n| !n.is_empty()).map(str::to_string);
    let category = match category.filter(|c| !c.is_empty()) {
      Some(raw) => Some(Category::from_filter(raw)?),
      None => None,
    };
    let available = available.map(parse_availability);
    Ok(Self {
      name,
      category,
      available,
    })
  }

  pub fn matches(&self, product: &Product) -> bool {
    self.name.as_deref().map_or(true, |n| product.name == n)
      && self.category.map_or(true, |c| product.category == c)
      && self.available.map_or(true, |a| product.available == a)
  }
}

pub fn parse_availability(raw: &str) -> bool {
  let value = raw.trim().to_lowercase();
  TRUTHY.contains(&value.as_str())
}
