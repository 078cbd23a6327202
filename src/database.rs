//! Local SQLite persistence for product records.
//!
//! Thin layer of single parameterized statements over one `products` table.
//! Every operation is terminal-to-the-action: errors are returned to the
//! caller and never retried or absorbed here.

use crate::error::{AppError, AppResult};
use crate::models::{Product, ProductInput, SortColumn, SortDirection};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// Filter and ordering applied to [`ProductStore::fetch`].
#[derive(Debug, Default, Clone)]
pub struct ProductQuery {
    /// Free-text search term; ignored when empty or whitespace.
    pub search: Option<String>,
    /// Whitelisted ORDER BY; `None` keeps rowid order.
    pub sort: Option<(SortColumn, SortDirection)>,
}

/// Returns the path to the inventory database file.
fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stockroom")
        .join("inventory.db")
}

/// Creates the `products` table if it does not already exist.
fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS products (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            name     TEXT NOT NULL,
            quantity INTEGER NOT NULL CHECK (quantity >= 0),
            price    REAL NOT NULL CHECK (price >= 0)
        );",
    )
}

/// Wraps the single connection to the local inventory database.
pub struct ProductStore {
    conn: Connection,
}

impl ProductStore {
    /// Opens (or creates) the database at the platform data directory.
    pub fn open_default() -> AppResult<Self> {
        Self::open(&default_db_path())
    }

    /// Opens (or creates) the database at `path` and initialises the schema.
    pub fn open(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        log::info!("Inventory DB: {}", path.display());
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Inserts a new product and returns its assigned id.
    pub fn insert(&self, input: &ProductInput) -> AppResult<i64> {
        self.conn.execute(
            "INSERT INTO products (name, quantity, price) VALUES (?1, ?2, ?3)",
            params![input.name, input.quantity, input.price],
        )?;
        let id = self.conn.last_insert_rowid();
        log::debug!("Inserted product {} ({})", id, input.name);
        Ok(id)
    }

    /// Rewrites the product with `id`. Targeting a missing id is an error.
    pub fn update(&self, id: i64, input: &ProductInput) -> AppResult<()> {
        let changed = self.conn.execute(
            "UPDATE products SET name = ?1, quantity = ?2, price = ?3 WHERE id = ?4",
            params![input.name, input.quantity, input.price, id],
        )?;
        if changed == 0 {
            return Err(AppError::NotFound(id));
        }
        log::debug!("Updated product {}", id);
        Ok(())
    }

    /// Deletes all products whose id is in `ids`, returning how many rows
    /// were removed. An empty slice is a no-op.
    pub fn delete(&self, ids: &[i64]) -> AppResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("DELETE FROM products WHERE id IN ({})", placeholders);
        let removed = self
            .conn
            .execute(&sql, params_from_iter(ids.iter()))?;
        log::debug!("Deleted {} of {} requested products", removed, ids.len());
        Ok(removed)
    }

    /// Looks up a single product by id.
    pub fn get(&self, id: i64) -> AppResult<Option<Product>> {
        let product = self
            .conn
            .query_row(
                "SELECT id, name, quantity, price FROM products WHERE id = ?1",
                params![id],
                row_to_product,
            )
            .optional()?;
        Ok(product)
    }

    /// Retrieves products, optionally filtered and sorted.
    ///
    /// A non-empty search term matches the name by substring, the numeric
    /// columns by exact value when the term itself is a number, and the
    /// numeric columns rendered as text by substring.
    pub fn fetch(&self, query: &ProductQuery) -> AppResult<Vec<Product>> {
        let mut sql = String::from("SELECT id, name, quantity, price FROM products");
        let mut params: Vec<Value> = Vec::new();

        if let Some(term) = query.search.as_deref() {
            let term = term.trim();
            if !term.is_empty() {
                let (clause, filter_params) = build_filter_clause(term);
                sql.push_str(&clause);
                params.extend(filter_params);
            }
        }

        if let Some((column, direction)) = query.sort {
            sql.push_str(&format!(
                " ORDER BY {} {}",
                column.as_sql(),
                direction.as_sql()
            ));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(params), row_to_product)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}

fn row_to_product(row: &rusqlite::Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        quantity: row.get(2)?,
        price: row.get(3)?,
    })
}

/// Builds the WHERE clause and its parameters for a search term.
///
/// Numeric values are additionally cast to text so a partial match like
/// "2.5" finds a price of 12.50.
fn build_filter_clause(term: &str) -> (String, Vec<Value>) {
    let mut conditions = vec!["name LIKE ?"];
    let pattern = format!("%{}%", term);
    let mut params = vec![Value::Text(pattern.clone())];

    if let Ok(number) = term.parse::<f64>() {
        conditions.push("quantity = ?");
        params.push(Value::Real(number));
        conditions.push("price = ?");
        params.push(Value::Real(number));
    }

    conditions.push("CAST(quantity AS TEXT) LIKE ?");
    params.push(Value::Text(pattern.clone()));
    conditions.push("CAST(price AS TEXT) LIKE ?");
    params.push(Value::Text(pattern));

    (format!(" WHERE {}", conditions.join(" OR ")), params)
}
