use chrono::Utc;
use devicegate_auth::{create_access_token, generate_refresh_token};
use devicegate_config::{JwtConfig, StoreConfig};
use devicegate_core::{AppError, hash_password, verify_password};
use tracing::{info, instrument, warn};

use crate::middleware::auth::AuthUser;
use crate::store::{IdentityStore, NewUser, RefreshSession};

use super::model::{
    LoginRequest, LogoutRequest, MeResponse, RefreshRequest, RegisterRequest, StatusResponse,
    TokenResponse,
};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all, fields(username = %dto.username))]
    pub async fn register_user(
        store: &IdentityStore,
        dto: RegisterRequest,
        store_config: &StoreConfig,
    ) -> Result<StatusResponse, AppError> {
        if store.find_user(&dto.username).await.is_some() {
            return Err(AppError::conflict("Username already exists"));
        }

        let password_hash = hash_password(&dto.password, store_config.bcrypt_cost)?;
        let email = dto
            .email
            .unwrap_or_else(|| format!("{}@example.local", dto.username));

        // The early check above is only a fast path; the store decides.
        store
            .register_user(NewUser {
                username: dto.username,
                email,
                password_hash,
            })
            .await
            .map_err(|e| e.into_app_error())?;

        info!("User registered");
        Ok(StatusResponse::new("registered"))
    }

    #[instrument(skip_all, fields(username = %dto.username))]
    pub async fn login_user(
        store: &IdentityStore,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let user = store.find_user(&dto.username).await.ok_or_else(|| {
            warn!("Login for unknown user");
            AppError::unauthorized(INVALID_CREDENTIALS)
        })?;

        if !verify_password(&dto.password, &user.password_hash)? {
            warn!("Login with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let access_token = create_access_token(&user.username, user.role, jwt_config)?;
        let refresh_token = generate_refresh_token();
        store
            .insert_refresh_token(
                refresh_token.clone(),
                RefreshSession::new(&user.username, Utc::now(), jwt_config.refresh_token_expiry),
            )
            .await;

        info!("User logged in");
        Ok(TokenResponse {
            access_token,
            refresh_token,
            expires_in_sec: jwt_config.access_token_expiry,
        })
    }

    /// Mints a new access token. The refresh token is returned unchanged.
    #[instrument(skip_all)]
    pub async fn refresh_token(
        store: &IdentityStore,
        dto: RefreshRequest,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let session = store
            .find_refresh_session(&dto.refresh_token, Utc::now())
            .await
            .ok_or_else(|| AppError::unauthorized("Invalid or expired refresh token"))?;

        let user = store
            .find_user(&session.username)
            .await
            .ok_or_else(|| AppError::unauthorized("Invalid or expired refresh token"))?;

        let access_token = create_access_token(&user.username, user.role, jwt_config)?;

        info!(username = %user.username, "Access token refreshed");
        Ok(TokenResponse {
            access_token,
            refresh_token: dto.refresh_token,
            expires_in_sec: jwt_config.access_token_expiry,
        })
    }

    /// Revokes the caller's refresh token. Tokens that are unknown or belong
    /// to someone else are left alone; the call still succeeds.
    #[instrument(skip_all, fields(username = %auth_user.username()))]
    pub async fn logout(
        store: &IdentityStore,
        auth_user: &AuthUser,
        dto: LogoutRequest,
    ) -> Result<StatusResponse, AppError> {
        let revoked = store
            .revoke_refresh_token(&dto.refresh_token, auth_user.username())
            .await;

        info!(revoked, "User logged out");
        Ok(StatusResponse::new("ok"))
    }

    pub fn me(auth_user: &AuthUser) -> MeResponse {
        MeResponse {
            username: auth_user.user.username.clone(),
            email: auth_user.user.email.clone(),
            role: auth_user.user.role,
        }
    }
}
