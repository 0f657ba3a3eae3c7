use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use devicegate::devicegate_config::{
    CorsConfig, JwtConfig, MetricsConfig, SensorProfile, StoreConfig, UptimeMode,
};
use devicegate::router::init_router;
use devicegate::state::AppState;
use devicegate::store::IdentityStore;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 900,
        refresh_token_expiry: 3600,
    }
}

pub fn test_store_config() -> StoreConfig {
    StoreConfig {
        state_file: None,
        bcrypt_cost: 4,
    }
}

pub fn test_state_with(jwt_config: JwtConfig, metrics_config: MetricsConfig) -> AppState {
    AppState::new(
        IdentityStore::in_memory(),
        jwt_config,
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        metrics_config,
        test_store_config(),
    )
}

pub fn test_state() -> AppState {
    test_state_with(
        test_jwt_config(),
        MetricsConfig {
            uptime_mode: UptimeMode::PerRequest,
            sensor_profile: SensorProfile::Constant,
        },
    )
}

pub fn setup_test_app() -> Router {
    init_router(test_state())
}

pub fn generate_unique_username() -> String {
    format!("user-{}", Uuid::new_v4().simple())
}

pub fn json_request(method: &str, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn register(app: &Router, username: &str, password: &str) -> StatusCode {
    let (status, _) = send(
        app,
        json_request(
            "POST",
            "/api/v1/auth/register",
            json!({ "username": username, "password": password }),
            None,
        ),
    )
    .await;
    status
}

/// Registers and logs in a fresh user; returns (username, accessToken, refreshToken).
#[allow(dead_code)]
pub async fn register_and_login(app: &Router) -> (String, String, String) {
    let username = generate_unique_username();
    assert_eq!(register(app, &username, "s3cret").await, StatusCode::CREATED);

    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/v1/auth/login",
            json!({ "username": username, "password": "s3cret" }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    (
        username,
        body["accessToken"].as_str().unwrap().to_string(),
        body["refreshToken"].as_str().unwrap().to_string(),
    )
}
