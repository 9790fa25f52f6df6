/// Product endpoints
///
/// - `GET /dashboard` - List all products (public)
/// - `POST /dashboard` - Create a product (token required)
/// - `DELETE /product/:id` - Delete a product (token required)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use catalog_shared::{
    auth::middleware::AuthContext,
    models::product::{CreateProduct, Product},
};
use serde::Deserialize;

/// Create product request
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: PriceInput,
    pub description: String,
}

/// Price as sent by the client, either a JSON string or a JSON number
///
/// Stored as text without normalization: `"9.99"` and `9.99` both become
/// `"9.99"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Text(String),
    Number(serde_json::Number),
}

impl From<PriceInput> for String {
    fn from(price: PriceInput) -> Self {
        match price {
            PriceInput::Text(text) => text,
            PriceInput::Number(number) => number.to_string(),
        }
    }
}

/// List every product
///
/// # Errors
///
/// - `500 Internal Server Error`: Store read failed
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = Product::list(&state.db)
        .await
        .map_err(|e| ApiError::internal("Error fetching products", e))?;

    Ok(Json(products))
}

/// Create a product
///
/// Answers `200 OK` with the stored product, including its assigned id.
///
/// # Errors
///
/// - `401 Unauthorized` / `400 Bad Request`: See the request gate
/// - `500 Internal Server Error`: Insert failed
pub async fn create_product(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<Json<Product>> {
    let product = Product::create(
        &state.db,
        CreateProduct {
            name: req.name,
            price: req.price.into(),
            description: req.description,
        },
    )
    .await
    .map_err(|e| ApiError::internal("Error saving product", e))?;

    tracing::info!(
        product_id = product.id,
        user_id = auth.user_id,
        email = %auth.email,
        "Product created"
    );

    Ok(Json(product))
}

/// Delete a product by id
///
/// Answers `204 No Content` whether or not the product existed.
///
/// # Errors
///
/// - `400 Bad Request`: Id is not an integer, or the token is invalid
/// - `401 Unauthorized`: No token
/// - `500 Internal Server Error`: Delete failed
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let deleted = Product::delete(&state.db, id)
        .await
        .map_err(|e| ApiError::internal("Error deleting product", e))?;

    if deleted {
        tracing::info!(product_id = id, user_id = auth.user_id, "Product deleted");
    } else {
        tracing::debug!(product_id = id, user_id = auth.user_id, "No product to delete");
    }

    Ok(StatusCode::NO_CONTENT)
}
