// catalog/src/model/category.rs

use crate::error::CatalogError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Closed classification of a product.
///
/// Serialized as its name (`"HOUSEWARES"`), never as an ordinal. Rows stored
/// without a category fall back to [`Category::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
  #[default]
  Unknown,
  Cloths,
  Food,
  Housewares,
  Automotive,
  Tools,
}

impl Category {
  pub const ALL: [Category; 6] = [
    Category::Unknown,
    Category::Cloths,
    Category::Food,
    Category::Housewares,
    Category::Automotive,
    Category::Tools,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Unknown => "UNKNOWN",
      Category::Cloths => "CLOTHS",
      Category::Food => "FOOD",
      Category::Housewares => "HOUSEWARES",
      Category::Automotive => "AUTOMOTIVE",
      Category::Tools => "TOOLS",
    }
  }

  /// Lenient parse used by list filters: the raw query value is upper-cased
  /// before matching. The error keeps the value as the client sent it.
  pub fn from_filter(raw: &str) -> Result<Self, CatalogError> {
    raw
      .to_uppercase()
      .parse::<Category>()
      .map_err(|_| CatalogError::UnknownCategory(raw.to_string()))
  }
}

impl FromStr for Category {
  type Err = CatalogError;

  /// Case-sensitive: only the exact enum names are accepted.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Category::ALL
      .iter()
      .copied()
      .find(|c| c.as_str() == s)
      .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
