/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Private in-memory database with migrations applied
/// - Router built over that database
/// - Request helpers and a registered test user

use axum::body::Body;
use axum::http::{Request, StatusCode};
use catalog_api::app::{build_router, AppState};
use catalog_api::config::{ApiConfig, Config, DatabaseConfig, JwtConfig};
use catalog_shared::db::migrations::run_migrations;
use catalog_shared::db::pool::{create_pool, DatabaseConfig as PoolConfig};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::Service as _;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789";

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
    pub config: Config,
}

impl TestContext {
    /// Creates a new test context over a fresh database
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            jwt: JwtConfig {
                secret: TEST_SECRET.to_string(),
            },
        };

        let db = create_pool(PoolConfig::in_memory()).await?;
        run_migrations(&db).await?;

        let state = AppState::new(db.clone(), config.clone());
        let app = build_router(state);

        Ok(TestContext { db, app, config })
    }

    /// Sends a request and returns status plus parsed JSON body
    ///
    /// An empty body comes back as `Value::Null`.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or_else(|_| {
                panic!("Non-JSON body ({}): {}", status, String::from_utf8_lossy(&body))
            })
        };

        (status, json)
    }

    /// POSTs a JSON body, optionally with an Authorization header
    pub async fn post_json(&self, uri: &str, body: Value, auth: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(auth) = auth {
            builder = builder.header("authorization", auth);
        }

        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    pub async fn delete(&self, uri: &str, auth: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("DELETE").uri(uri);
        if let Some(auth) = auth {
            builder = builder.header("authorization", auth);
        }

        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// Registers a user and returns the issued token
    pub async fn register(&self, name: &str, email: &str, password: &str) -> String {
        let (status, body) = self
            .post_json(
                "/register",
                json!({ "name": name, "email": email, "password": password }),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);

        body["token"].as_str().unwrap().to_string()
    }
}

/// Formats a token as an Authorization header value
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
