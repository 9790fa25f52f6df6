/// Product model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE products (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL,
///     price TEXT NOT NULL,
///     description TEXT NOT NULL
/// );
/// ```
///
/// Price is stored as the text the client sent; it is never parsed.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Product row, serialized verbatim by the catalog listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Store-assigned identifier
    pub id: i64,
    pub name: String,
    pub price: String,
    pub description: String,
}

/// Input for creating a new product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl Product {
    /// Inserts a product and returns the stored row
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(pool: &SqlitePool, data: CreateProduct) -> Result<Self, sqlx::Error> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, description)
            VALUES (?, ?, ?)
            RETURNING id, name, price, description
            "#,
        )
        .bind(&data.name)
        .bind(&data.price)
        .bind(&data.description)
        .fetch_one(pool)
        .await?;

        Ok(product)
    }

    /// Lists every product
    ///
    /// No ORDER BY: rows come back in whatever order the store yields.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Product>("SELECT id, name, price, description FROM products")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price, description FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Deletes a product by id
    ///
    /// # Returns
    ///
    /// True if a row was removed, false if no product had that id
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations::run_migrations, pool::{create_pool, DatabaseConfig}};

    async fn setup() -> SqlitePool {
        let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    fn widget(name: &str, price: &str) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price: price.to_string(),
            description: format!("{} description", name),
        }
    }

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let pool = setup().await;

        let product = Product::create(&pool, widget("Widget", "9.99")).await.unwrap();
        let stored = Product::find_by_id(&pool, product.id).await.unwrap().unwrap();

        assert_eq!(stored, product);
        assert_eq!(stored.price, "9.99");
    }

    #[tokio::test]
    async fn test_price_is_kept_verbatim() {
        let pool = setup().await;

        let product = Product::create(&pool, widget("Odd", "about 3 euros")).await.unwrap();
        assert_eq!(product.price, "about 3 euros");
    }

    #[tokio::test]
    async fn test_list_contains_all_created() {
        let pool = setup().await;

        for (name, price) in [("A", "1"), ("B", "2"), ("C", "3")] {
            Product::create(&pool, widget(name, price)).await.unwrap();
        }

        let products = Product::list(&pool).await.unwrap();
        assert_eq!(products.len(), 3);

        let mut names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(Product::count(&pool).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = setup().await;
        let product = Product::create(&pool, widget("Gone", "1")).await.unwrap();

        assert!(Product::delete(&pool, product.id).await.unwrap());
        assert!(Product::find_by_id(&pool, product.id).await.unwrap().is_none());

        // Second delete finds nothing
        assert!(!Product::delete(&pool, product.id).await.unwrap());
    }
}
