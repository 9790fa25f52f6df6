/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Registration and login
/// - `products`: Catalog listing, creation, and deletion

pub mod auth;
pub mod health;
pub mod products;
