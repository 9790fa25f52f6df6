/// Bearer-token request gate
///
/// Extracts the session token from the `Authorization` header, validates
/// it, and produces an [`AuthContext`] that the API layer inserts into the
/// request extensions.
///
/// # Outcomes
///
/// - No token -> [`AuthError::MissingCredentials`] (401 at the API layer)
/// - Token present but malformed, badly signed, or expired ->
///   [`AuthError::InvalidToken`] (400 at the API layer)
///
/// # Example
///
/// ```
/// use axum::http::{header, HeaderMap, HeaderValue};
/// use catalog_shared::auth::jwt::{create_token, Claims};
/// use catalog_shared::auth::middleware::authenticate;
///
/// let token = create_token(&Claims::new(5, "a@x.com"), "secret").unwrap();
///
/// let mut headers = HeaderMap::new();
/// headers.insert(
///     header::AUTHORIZATION,
///     HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
/// );
///
/// let auth = authenticate(&headers, "secret").unwrap();
/// assert_eq!(auth.user_id, 5);
/// ```

use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};

use super::jwt::{validate_token, Claims, JwtError};

/// Identity of the caller, added to request extensions after the gate
///
/// # Example
///
/// ```
/// use axum::Extension;
/// use catalog_shared::auth::middleware::AuthContext;
///
/// async fn handler(Extension(auth): Extension<AuthContext>) -> String {
///     format!("User {} <{}>", auth.user_id, auth.email)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    pub user_id: i64,
    pub email: String,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}

/// Error type for the request gate
#[derive(Debug)]
pub enum AuthError {
    /// No token in the Authorization header
    MissingCredentials,

    /// Token failed validation
    InvalidToken(JwtError),
}

impl AuthError {
    /// Message shown to the client
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "Access denied. No token provided.",
            AuthError::InvalidToken(_) => "Invalid token.",
        }
    }
}

/// Picks the token out of an Authorization header value
///
/// The token is the second space-separated part; the scheme word itself is
/// not checked.
///
/// ```
/// use catalog_shared::auth::middleware::bearer_token;
///
/// assert_eq!(bearer_token("Bearer abc"), Some("abc"));
/// assert_eq!(bearer_token("Bearer"), None);
/// ```
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value.split(' ').nth(1).filter(|token| !token.is_empty())
}

/// Runs the gate against a request's headers
///
/// # Errors
///
/// See the module docs for the two failure outcomes.
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<AuthContext, AuthError> {
    // Non-ASCII bytes still count as a token; validation rejects it
    let header_value = headers
        .get(header::AUTHORIZATION)
        .map(|v| String::from_utf8_lossy(v.as_bytes()));

    let token = header_value
        .as_deref()
        .and_then(bearer_token)
        .ok_or(AuthError::MissingCredentials)?;

    let claims = validate_token(token, secret).map_err(AuthError::InvalidToken)?;

    Ok(AuthContext::from(claims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::create_token;
    use axum::http::HeaderValue;
    use chrono::Duration;

    const SECRET: &str = "gate-secret";

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("Token xyz"), Some("xyz"));
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token(""), None);
    }

    #[test]
    fn test_authenticate_valid_token() {
        let token = create_token(&Claims::new(9, "a@x.com"), SECRET).unwrap();
        let headers = headers_with(&format!("Bearer {}", token));

        let auth = authenticate(&headers, SECRET).unwrap();
        assert_eq!(
            auth,
            AuthContext {
                user_id: 9,
                email: "a@x.com".to_string()
            }
        );
    }

    #[test]
    fn test_authenticate_missing_header() {
        let result = authenticate(&HeaderMap::new(), SECRET);
        assert!(matches!(result, Err(AuthError::MissingCredentials)));

        let result = authenticate(&headers_with("Bearer"), SECRET);
        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }

    #[test]
    fn test_authenticate_bad_tokens() {
        let expired = create_token(
            &Claims::with_expiration(1, "a@x.com", Duration::seconds(-10)),
            SECRET,
        )
        .unwrap();
        let foreign = create_token(&Claims::new(1, "a@x.com"), "other-secret").unwrap();

        for token in ["garbage", expired.as_str(), foreign.as_str()] {
            let result = authenticate(&headers_with(&format!("Bearer {}", token)), SECRET);
            assert!(matches!(result, Err(AuthError::InvalidToken(_))));
        }
    }

    #[test]
    fn test_authenticate_undecodable_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xff\xfe").unwrap(),
        );
        assert!(matches!(
            authenticate(&headers, SECRET),
            Err(AuthError::InvalidToken(_))
        ));

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_bytes(b"\xff").unwrap());
        assert!(matches!(
            authenticate(&headers, SECRET),
            Err(AuthError::MissingCredentials)
        ));
    }

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(
            AuthError::MissingCredentials.message(),
            "Access denied. No token provided."
        );
        assert_eq!(AuthError::InvalidToken(JwtError::Expired).message(), "Invalid token.");
    }
}
