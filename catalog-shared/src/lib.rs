//! # Catalog Shared Library
//!
//! This crate contains the persistence layer and credential handling used by
//! the catalog API server.
//!
//! ## Module Organization
//!
//! - `db`: SQLite connection pool and schema migrations
//! - `models`: `users` and `products` rows and their queries
//! - `auth`: Password hashing, session tokens, and the request gate

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the catalog shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
