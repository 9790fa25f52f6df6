/// Authentication endpoints
///
/// - `POST /register` - Create an account and get a session token
/// - `POST /login` - Exchange email and password for a session token
///
/// Both answer `201 Created` with `{ "token": "...", "name": "..." }`.
/// Tokens expire after one hour; there is no refresh endpoint.
///
/// A login that matches a legacy bcrypt hash rewrites it as Argon2id.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, http::StatusCode, Json};
use catalog_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, User},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Email address, used as the login key
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// Plaintext password, hashed before storage
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response for both register and login
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Session token (1h)
    pub token: String,

    /// User's display name
    pub name: String,
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /register
/// Content-Type: application/json
///
/// { "name": "Ann", "email": "a@x.com", "password": "pw123" }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: A field is empty
/// - `500 Internal Server Error`: Hashing or insert failed
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    req.validate()?;

    let plaintext = req.password;
    let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&plaintext))
        .await
        .map_err(|e| ApiError::internal("Error hashing password", e))?
        .map_err(|e| ApiError::internal("Error hashing password", e))?;

    let user = User::create(
        &state.db,
        CreateUser {
            name: req.name,
            email: req.email,
            password_hash,
        },
    )
    .await
    .map_err(|e| ApiError::internal("Error registering user", e))?;

    let token = issue_token(&state, &user)?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            name: user.name,
        }),
    ))
}

/// Log in with email and password
///
/// # Endpoint
///
/// ```text
/// POST /login
/// Content-Type: application/json
///
/// { "email": "a@x.com", "password": "pw123" }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No user with that email
/// - `401 Unauthorized`: Wrong password
/// - `422 Unprocessable Entity`: A field is empty
/// - `500 Internal Server Error`: Lookup or hash comparison failed
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    req.validate()?;

    let user = User::find_by_email(&state.db, &req.email)
        .await
        .map_err(|e| ApiError::internal("Error finding user", e))?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let plaintext = req.password.clone();
    let stored_hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || {
        password::verify_password(&plaintext, &stored_hash)
    })
    .await
    .map_err(|e| ApiError::internal("Error comparing passwords", e))?
    .map_err(|e| ApiError::internal("Error comparing passwords", e))?;

    if !valid {
        tracing::info!(user_id = user.id, "Login rejected: wrong password");
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    if password::needs_rehash(&user.password_hash) {
        upgrade_password_hash(&state, user.id, req.password).await;
    }

    let token = issue_token(&state, &user)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            name: user.name,
        }),
    ))
}

/// Replaces a legacy bcrypt hash with Argon2id
///
/// Failures are logged only; the login itself already succeeded.
async fn upgrade_password_hash(state: &AppState, user_id: i64, plaintext: String) {
    let hashed = tokio::task::spawn_blocking(move || password::hash_password(&plaintext))
        .await
        .map_err(|e| e.to_string())
        .and_then(|result| result.map_err(|e| e.to_string()));

    let new_hash = match hashed {
        Ok(hash) => hash,
        Err(e) => {
            tracing::warn!(user_id, error = %e, "Could not rehash legacy password");
            return;
        }
    };

    match User::update_password_hash(&state.db, user_id, &new_hash).await {
        Ok(_) => tracing::info!(user_id, "Upgraded legacy password hash"),
        Err(e) => tracing::warn!(user_id, error = %e, "Could not store rehashed password"),
    }
}

fn issue_token(state: &AppState, user: &User) -> ApiResult<String> {
    let claims = jwt::Claims::new(user.id, user.email.clone());
    jwt::create_token(&claims, state.jwt_secret())
        .map_err(|e| ApiError::internal("Error issuing token", e))
}
