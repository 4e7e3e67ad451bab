// catalog/src/model/mod.rs

//! The product record and the value types it is built from.

pub mod category;
pub mod filter;
pub mod price;
pub mod product;

pub use category::Category;
pub use filter::{parse_availability, ProductFilter};
pub use price::{Price, PRICE_SCALE};
pub use product::{Product, DESCRIPTION_MAX_LEN, NAME_MAX_LEN};
