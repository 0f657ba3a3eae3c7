//! Access token claims.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The only role the gateway hands out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Viewer,
}

/// JWT claims for access tokens.
///
/// # Fields
///
/// - `sub`: username
/// - `role`: role of the user at issuance time
/// - `exp`: expiration (Unix timestamp)
/// - `iat`: issued-at (Unix timestamp)
/// - `jti`: random id so two tokens minted in the same second still differ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: usize,
    pub iat: usize,
    pub jti: String,
}
