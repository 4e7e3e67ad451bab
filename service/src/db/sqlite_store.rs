// service/src/db/sqlite_store.rs

use async_trait::async_trait;
use catalog::store::persisted_id;
use catalog::{CatalogError, CatalogResult, Category, Price, Product, ProductFilter, ProductStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{FromRow, QueryBuilder, Sqlite};
use std::str::FromStr;
use tracing::{debug, error, info, instrument};

const SELECT_PRODUCTS: &str = "SELECT id, name, description, price, available, category FROM products";

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name VARCHAR(100) NOT NULL,
  description VARCHAR(250) NOT NULL,
  price TEXT NOT NULL,
  available BOOLEAN NOT NULL DEFAULT 1,
  category TEXT NOT NULL DEFAULT 'UNKNOWN'
    CHECK (category IN ('UNKNOWN', 'CLOTHS', 'FOOD', 'HOUSEWARES', 'AUTOMOTIVE', 'TOOLS'))
)
"#;

/// A `products` row as SQLite returns it. Price and category come back as text.
#[derive(Debug, FromRow)]
struct ProductRow {
  id: i64,
  name: String,
  description: String,
  price: String,
  available: bool,
  category: String,
}

impl TryFrom<ProductRow> for Product {
  type Error = CatalogError;

  fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
    let price = row
      .price
      .parse::<Price>()
      .map_err(|e| CatalogError::Backend(format!("Corrupt price in row {}: {}", row.id, e)))?;
    let category = row
      .category
      .parse::<Category>()
      .map_err(|e| CatalogError::Backend(format!("Corrupt category in row {}: {}", row.id, e)))?;
    Ok(Product {
      id: Some(row.id),
      name: row.name,
      description: row.description,
      price,
      available: row.available,
      category,
    })
  }
}

fn db_error(e: sqlx::Error) -> CatalogError {
  error!("Database operation failed: {}", e);
  CatalogError::backend(e)
}

fn decode_rows(rows: Vec<ProductRow>) -> CatalogResult<Vec<Product>> {
  rows.into_iter().map(Product::try_from).collect()
}

/// `ProductStore` over a SQLite database.
///
/// Each mutation runs as its own statement, so SQLite commits it before the
/// call returns.
#[derive(Debug, Clone)]
pub struct SqliteStore {
  pool: SqlitePool,
}

impl SqliteStore {
  /// Opens `database_url` and creates the schema if needed.
  ///
  /// In-memory databases are pinned to one long-lived connection, otherwise
  /// every pooled connection would see its own empty database.
  pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

    let pool_options = if in_memory {
      SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
    } else {
      SqlitePoolOptions::new().max_connections(5)
    };
    let pool = pool_options.connect_with(options).await?;

    let store = Self::from_pool(pool);
    store.migrate().await?;
    Ok(store)
  }

  pub fn from_pool(pool: SqlitePool) -> Self {
    Self { pool }
  }

  pub async fn migrate(&self) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PRODUCTS_TABLE).execute(&self.pool).await?;
    info!("Product table is ready.");
    Ok(())
  }

  pub fn pool(&self) -> &SqlitePool {
    &self.pool
  }
}

#[async_trait]
impl ProductStore for SqliteStore {
  #[instrument(name = "SqliteStore::create", skip_all, fields(name = %product.name))]
  async fn create(&self, product: Product) -> CatalogResult<Product> {
    let result = sqlx::query(
      "INSERT INTO products (name, description, price, available, category) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price.to_string())
    .bind(product.available)
    .bind(product.category.as_str())
    .execute(&self.pool)
    .await
    .map_err(db_error)?;

    let id = result.last_insert_rowid();
    info!(product_id = id, "Created product.");
    Ok(Product { id: Some(id), ..product })
  }

  #[instrument(name = "SqliteStore::update", skip_all, fields(name = %product.name))]
  async fn update(&self, product: Product) -> CatalogResult<Product> {
    let id = persisted_id(&product)?;
    let result = sqlx::query(
      "UPDATE products SET name = ?, description = ?, price = ?, available = ?, category = ? WHERE id = ?",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price.to_string())
    .bind(product.available)
    .bind(product.category.as_str())
    .bind(id)
    .execute(&self.pool)
    .await
    .map_err(db_error)?;

    if result.rows_affected() == 0 {
      return Err(CatalogError::NotFound(id));
    }
    info!(product_id = id, "Updated product.");
    Ok(product)
  }

  #[instrument(name = "SqliteStore::delete", skip(self))]
  async fn delete(&self, id: i64) -> CatalogResult<()> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(db_error)?;

    if result.rows_affected() > 0 {
      info!(product_id = id, "Deleted product.");
    } else {
      debug!(product_id = id, "Delete of absent product ignored.");
    }
    Ok(())
  }

  async fn find(&self, id: i64) -> CatalogResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_PRODUCTS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(db_error)?;
    row.map(Product::try_from).transpose()
  }

  async fn all(&self) -> CatalogResult<Vec<Product>> {
    self.search(&ProductFilter::default()).await
  }

  #[instrument(name = "SqliteStore::search", skip(self))]
  async fn search(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>> {
    let mut query = QueryBuilder::<Sqlite>::new(SELECT_PRODUCTS);
    let mut keyword = " WHERE ";

    if let Some(name) = &filter.name {
      query.push(keyword).push("name = ").push_bind(name.clone());
      keyword = " AND ";
    }
    if let Some(category) = filter.category {
      query.push(keyword).push("category = ").push_bind(category.as_str());
      keyword = " AND ";
    }
    if let Some(available) = filter.available {
      query.push(keyword).push("available = ").push_bind(available);
    }
    query.push(" ORDER BY id");

    let rows: Vec<ProductRow> = query.build_query_as().fetch_all(&self.pool).await.map_err(db_error)?;
    debug!("Fetched {} products.", rows.len());
    decode_rows(rows)
  }

  #[instrument(name = "SqliteStore::reset", skip(self))]
  async fn reset(&self) -> CatalogResult<u64> {
    let result = sqlx::query("DELETE FROM products")
      .execute(&self.pool)
      .await
      .map_err(db_error)?;
    let removed = result.rows_affected();
    info!(removed, "Removed all products.");
    Ok(removed)
  }
}
