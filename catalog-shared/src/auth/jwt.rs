/// Session token generation and validation
///
/// Tokens are JWTs signed with HS256 and carry the user's id and email.
/// They expire one hour after issuance and cannot be refreshed or revoked;
/// an expired token means logging in again.
///
/// # Validation
///
/// - Signature must match the shared secret
/// - Issuer must be `catalog-api`
/// - `nbf` must not be in the future
/// - Rejected at or after `exp`, with no leeway
///
/// # Example
///
/// ```
/// use catalog_shared::auth::jwt::{create_token, validate_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let claims = Claims::new(42, "a@x.com");
/// let token = create_token(&claims, "your-secret-key")?;
///
/// let validated = validate_token(&token, "your-secret-key")?;
/// assert_eq!(validated.sub, 42);
/// assert_eq!(validated.email, "a@x.com");
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

/// Issuer stamped into every token
pub const ISSUER: &str = "catalog-api";

/// How long a token stays valid after issuance, in seconds
pub const TOKEN_LIFETIME_SECONDS: i64 = 60 * 60;

fn token_lifetime() -> Duration {
    Duration::seconds(TOKEN_LIFETIME_SECONDS)
}

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Signature or claim check failed
    #[error("Failed to validate token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Not a well-formed JWT
    #[error("Invalid token format: {0}")]
    InvalidFormat(String),

    /// Invalid issuer
    #[error("Invalid issuer: expected {expected}")]
    InvalidIssuer { expected: String },
}

/// JWT claims structure
///
/// # Standard Claims
///
/// - `sub`: Subject (user id)
/// - `iss`: Issuer (always "catalog-api")
/// - `iat`: Issued at timestamp
/// - `exp`: Expiration timestamp
/// - `nbf`: Not before timestamp
///
/// # Custom Claims
///
/// - `email`: Email the user registered or logged in with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - User ID
    pub sub: i64,

    /// User email (custom claim)
    pub email: String,

    /// Issuer - Always "catalog-api"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,
}

impl Claims {
    /// Creates claims issued now, expiring after [`TOKEN_LIFETIME_SECONDS`]
    pub fn new(user_id: i64, email: impl Into<String>) -> Self {
        Self::issued_at(user_id, email, Utc::now())
    }

    /// Creates claims as if issued at `issued_at`
    ///
    /// # Example
    ///
    /// ```
    /// use catalog_shared::auth::jwt::Claims;
    /// use chrono::{Duration, Utc};
    ///
    /// // Issued 59 minutes ago: one minute left
    /// let claims = Claims::issued_at(1, "a@x.com", Utc::now() - Duration::minutes(59));
    /// assert!(!claims.is_expired());
    /// ```
    pub fn issued_at(user_id: i64, email: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self::build(user_id, email.into(), issued_at, token_lifetime())
    }

    /// Creates claims issued now with a custom lifetime
    ///
    /// A negative duration yields an already-expired token.
    pub fn with_expiration(user_id: i64, email: impl Into<String>, expires_in: Duration) -> Self {
        Self::build(user_id, email.into(), Utc::now(), expires_in)
    }

    fn build(user_id: i64, email: String, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            sub: user_id,
            email,
            iss: ISSUER.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
            nbf: issued_at.timestamp(),
        }
    }

    /// True at or after the expiration instant
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets time until expiration
    pub fn time_until_expiration(&self) -> Option<Duration> {
        let now = Utc::now().timestamp();
        if self.exp > now {
            Some(Duration::seconds(self.exp - now))
        } else {
            None
        }
    }
}

/// Signs claims with HS256
///
/// # Errors
///
/// Returns `JwtError::CreateError` if encoding fails
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a token and extracts its claims
///
/// # Errors
///
/// - `JwtError::InvalidFormat` if the string is not a decodable JWT
/// - `JwtError::Expired` at or after `exp`
/// - `JwtError::InvalidIssuer` if the issuer is not `catalog-api`
/// - `JwtError::ValidationError` for a bad signature or other claim failure
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => JwtError::Expired,
        ErrorKind::InvalidIssuer => JwtError::InvalidIssuer {
            expected: ISSUER.to_string(),
        },
        ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
            JwtError::InvalidFormat(e.to_string())
        }
        _ => JwtError::ValidationError(format!("Token validation failed: {}", e)),
    })?;

    // jsonwebtoken still accepts a token in the exact second of `exp`
    if token_data.claims.is_expired() {
        return Err(JwtError::Expired);
    }

    Ok(token_data.claims)
}
