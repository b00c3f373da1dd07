/// Authentication utilities
///
/// Secure authentication primitives for CarbonAtlas:
///
/// - [`password`]: Argon2id password hashing and strength validation
/// - [`jwt`]: HS256 session token issuance and validation
///
/// # Example
///
/// ```
/// use carbonatlas_shared::auth::jwt::{create_token, validate_token, Claims};
/// use carbonatlas_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let claims = Claims::new("user-id".to_string());
/// let token = create_token(&claims, "signing-key-at-least-32-bytes-long")?;
/// assert_eq!(
///     validate_token(&token, "signing-key-at-least-32-bytes-long")?.sub,
///     "user-id"
/// );
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod password;
