/// Credential handling
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: Session token issuance and validation
/// - [`middleware`]: Bearer-token request gate
///
/// Session tokens are stateless: validity depends only on the signature
/// and the `exp` claim. There is no server-side session table and no
/// revocation.
///
/// # Example
///
/// ```no_run
/// use catalog_shared::auth::password::{hash_password, verify_password};
/// use catalog_shared::auth::jwt::{create_token, validate_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("pw123")?;
/// assert!(verify_password("pw123", &hash)?);
///
/// let token = create_token(&Claims::new(1, "a@x.com"), "secret-key")?;
/// let claims = validate_token(&token, "secret-key")?;
/// assert_eq!(claims.sub, 1);
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;
pub mod password;
