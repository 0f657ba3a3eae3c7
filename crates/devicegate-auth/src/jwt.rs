//! JWT utilities for access tokens.
//!
//! Tokens are HS256-signed with `JwtConfig::secret` and expire after
//! `JwtConfig::access_token_expiry` seconds. Verification checks signature
//! and expiry only; whether the subject still exists is the caller's concern.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use devicegate_config::JwtConfig;
use devicegate_core::AppError;

use crate::claims::{Claims, Role};

/// Creates a signed access token for `username`.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_access_token(
    username: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = now.saturating_add(jwt_config.access_token_expiry).max(0);

    let claims = Claims {
        sub: username.to_string(),
        role,
        exp: exp as usize,
        iat: now as usize,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired, or the token is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}
