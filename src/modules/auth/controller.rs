use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use devicegate_core::{AppError, ErrorBody};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    LoginRequest, LogoutRequest, MeResponse, RefreshRequest, RegisterRequest, StatusResponse,
    TokenResponse,
};
use super::service::AuthService;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = StatusResponse),
        (status = 400, description = "Missing username/password or malformed body", body = ErrorBody),
        (status = 409, description = "Username already exists", body = ErrorBody)
    ),
    tag = "Authentication"
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<StatusResponse>), AppError> {
    let response = AuthService::register_user(&state.store, dto, &state.store_config).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login and receive an access/refresh token pair
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    ),
    tag = "Authentication"
)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthService::login_user(&state.store, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "New access token; refresh token unchanged", body = TokenResponse),
        (status = 401, description = "Unknown or expired refresh token", body = ErrorBody)
    ),
    tag = "Authentication"
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RefreshRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthService::refresh_token(&state.store, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Revoke a refresh token
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    request_body = LogoutRequest,
    responses(
        (status = 200, description = "Logged out", body = StatusResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
pub async fn logout_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<LogoutRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let response = AuthService::logout(&state.store, &auth_user, dto).await?;
    Ok(Json(response))
}

/// Current user's profile
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Authenticated user", body = MeResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
pub async fn get_me(auth_user: AuthUser) -> Json<MeResponse> {
    Json(AuthService::me(&auth_user))
}
