// catalog/src/model/price.rs

use crate::error::CatalogError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Digits kept after the decimal point.
pub const PRICE_SCALE: u32 = 2;

/// Ten significant digits, two of them fractional.
const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, PRICE_SCALE); // 99999999.99

/// Fixed-point currency amount.
///
/// Always carries exactly [`PRICE_SCALE`] fractional digits, so `"9.9"` and
/// `"9.90"` are the same price and both print as `9.90`. Serialized as a JSON
/// string to keep the exact decimal text on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
  pub fn new(amount: Decimal) -> Result<Self, CatalogError> {
    let mut normalized = amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if normalized.abs() > MAX_PRICE {
      return Err(CatalogError::validation(format!(
        "Invalid product: price {} exceeds {}",
        amount, MAX_PRICE
      )));
    }
    normalized.rescale(PRICE_SCALE);
    Ok(Price(normalized))
  }

  /// Builds a price from integer cents, e.g. `Price::from_cents(990)` is `9.90`.
  pub fn from_cents(cents: i64) -> Result<Self, CatalogError> {
    Price::new(Decimal::new(cents, PRICE_SCALE))
  }
}

impl FromStr for Price {
  type Err = CatalogError;

  /// Accepts plain (`"10.50"`) and scientific (`"1e2"`) notation.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    let amount = Decimal::from_str(trimmed)
      .or_else(|_| Decimal::from_scientific(trimmed))
      .map_err(|e| CatalogError::validation(format!("Invalid product: invalid price '{}': {}", s, e)))?;
    Price::new(amount)
  }
}

impl fmt::Display for Price {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

impl Serialize for Price {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&self.0)
  }
}
