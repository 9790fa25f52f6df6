/// Database models for the catalog
///
/// This module contains the two row types and their queries.
///
/// # Models
///
/// - `user`: Accounts and their stored password hashes
/// - `product`: Catalog entries
///
/// # Example
///
/// ```no_run
/// use catalog_shared::models::product::{CreateProduct, Product};
/// use catalog_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::in_memory()).await?;
/// catalog_shared::db::migrations::run_migrations(&pool).await?;
///
/// let product = Product::create(
///     &pool,
///     CreateProduct {
///         name: "Widget".to_string(),
///         price: "9.99".to_string(),
///         description: "A widget".to_string(),
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod product;
pub mod user;
