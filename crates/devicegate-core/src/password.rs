//! Password hashing with bcrypt.
//!
//! The work factor is passed in by the caller (see `StoreConfig::bcrypt_cost`)
//! so tests can run with a cheap cost while production uses
//! [`bcrypt::DEFAULT_COST`].
//!
//! bcrypt only looks at the first 72 bytes of its input (NUL terminator
//! included). The non-truncating variants are used so that two passwords
//! sharing a long prefix never hash alike.

use bcrypt::{BcryptError, non_truncating_hash, non_truncating_verify};

use crate::errors::AppError;

/// Longest password bcrypt can hash without truncation.
pub const MAX_PASSWORD_BYTES: usize = 71;

pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    non_truncating_hash(password, cost).map_err(|e| match e {
        BcryptError::Truncation(_) => AppError::validation(format!(
            "password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )),
        e => AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)),
    })
}

/// Returns `Ok(false)` for passwords too long to have ever been hashed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    match non_truncating_verify(password, hash) {
        Ok(matches) => Ok(matches),
        Err(BcryptError::Truncation(_)) => Ok(false),
        Err(e) => Err(AppError::internal(anyhow::anyhow!(
            "Failed to verify password: {}",
            e
        ))),
    }
}
