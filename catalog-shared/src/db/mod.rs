/// Database layer for the catalog
///
/// This module provides the SQLite connection pool and schema migrations.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `migrations`: Embedded schema migrations, applied at startup
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use catalog_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: "sqlite:db.sqlite".to_string(),
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     catalog_shared::db::migrations::run_migrations(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod pool;
pub mod migrations;
