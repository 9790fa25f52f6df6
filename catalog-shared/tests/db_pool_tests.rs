/// Integration tests for the file-backed SQLite pool
///
/// Each test works on its own database file in a fresh temp directory.

use catalog_shared::db::migrations::{get_migration_status, run_migrations};
use catalog_shared::db::pool::{close_pool, create_pool, get_pool_stats, health_check, DatabaseConfig};
use catalog_shared::models::product::{CreateProduct, Product};
use std::path::PathBuf;
use tempfile::TempDir;

/// Database file inside a temp directory removed on drop
struct TempDb {
    _dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(format!("{}.sqlite", name));
        Self { _dir: dir, path }
    }

    fn config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: format!("sqlite:{}", self.path.display()),
            max_connections: 4,
            ..Default::default()
        }
    }
}

#[tokio::test]
async fn test_create_pool_creates_missing_file() {
    let db = TempDb::new("create");
    assert!(!db.path.exists());

    let pool = create_pool(db.config()).await.expect("Failed to create pool");
    assert!(db.path.exists(), "Database file should be created");

    health_check(&pool).await.expect("Health check should succeed");

    close_pool(pool).await;
}

#[tokio::test]
async fn test_create_pool_in_missing_directory() {
    let config = DatabaseConfig {
        url: "sqlite:/nonexistent-catalog-dir/nested/db.sqlite".to_string(),
        connect_timeout_seconds: 2,
        ..Default::default()
    };

    assert!(create_pool(config).await.is_err());
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let db = TempDb::new("reopen");

    let pool = create_pool(db.config()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    let created = Product::create(
        &pool,
        CreateProduct {
            name: "Widget".to_string(),
            price: "9.99".to_string(),
            description: "d".to_string(),
        },
    )
    .await
    .unwrap();
    close_pool(pool).await;

    let pool = create_pool(db.config()).await.unwrap();
    run_migrations(&pool).await.expect("Second startup should be a no-op");

    let status = get_migration_status(&pool).await.unwrap();
    assert!(status.is_up_to_date);

    let products = Product::list(&pool).await.unwrap();
    assert_eq!(products, vec![created]);

    close_pool(pool).await;
}

#[tokio::test]
async fn test_pool_concurrent_queries() {
    let db = TempDb::new("concurrent");
    let pool = create_pool(db.config()).await.unwrap();

    let mut handles = vec![];
    for i in 0..20i64 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            let row: (i64,) = sqlx::query_as("SELECT ?")
                .bind(i)
                .fetch_one(&pool)
                .await
                .expect("Failed to execute query");
            assert_eq!(row.0, i);
        }));
    }

    for handle in handles {
        handle.await.expect("Task panicked");
    }

    let stats = get_pool_stats(&pool);
    assert!(stats.total_connections <= 4);

    close_pool(pool).await;
}

#[tokio::test]
async fn test_close_pool() {
    let db = TempDb::new("close");
    let pool = create_pool(db.config()).await.unwrap();

    close_pool(pool.clone()).await;

    let result: Result<(i64,), _> = sqlx::query_as("SELECT 1").fetch_one(&pool).await;
    assert!(result.is_err(), "Queries should fail after pool is closed");
}
