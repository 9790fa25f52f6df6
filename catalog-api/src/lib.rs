//! # Catalog API Server Library
//!
//! Account registration/login and a small product catalog over HTTP.
//!
//! ## Modules
//!
//! - `app`: Application state, router builder, and the token gate layer
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
