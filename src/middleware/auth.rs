use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use devicegate_auth::verify_token;
use devicegate_core::AppError;

use crate::state::AppState;
use crate::store::UserRecord;

/// Extractor for protected routes: a verified access token whose subject
/// still exists in the identity store.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: UserRecord,
}

impl AuthUser {
    pub fn username(&self) -> &str {
        &self.user.username
    }
}

/// Pulls the token out of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = bearer_token(auth_header)
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let claims = verify_token(token, &state.jwt_config)?;

        let user = state
            .store
            .find_user(&claims.sub)
            .await
            .ok_or_else(|| AppError::unauthorized("Invalid or expired token"))?;

        Ok(AuthUser { user })
    }
}
