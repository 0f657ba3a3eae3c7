#[allow(dead_code)]
mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{get_request, send, setup_test_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_gateway_status_without_token() {
    let app = setup_test_app();

    let (status, body) = send(&app, get_request("/api/v1/gateway/status", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "service": "ok", "opcua": "simulated", "cache": "ready" })
    );
}

#[tokio::test]
async fn test_gateway_status_ignores_bad_token() {
    let app = setup_test_app();

    let (status, _) = send(
        &app,
        get_request("/api/v1/gateway/status", Some("garbage")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = setup_test_app();

    for uri in ["/api/v1/nope", "/api/v2/auth/me", "/"] {
        let (status, body) = send(&app, get_request(uri, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri: {uri}");
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app();

    let (status, body) = send(&app, get_request("/api-docs/openapi.json", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/gateway/status"].is_object());
    assert!(body["paths"]["/api/v1/auth/login"].is_object());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = setup_test_app();

    let request = Request::builder()
        .uri("/api/v1/gateway/status")
        .header("x-request-id", "req-1234")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "req-1234"
    );
}

#[tokio::test]
async fn test_request_id_is_generated_when_absent() {
    let app = setup_test_app();

    let response = app
        .oneshot(get_request("/api/v1/gateway/status", None))
        .await
        .unwrap();

    let id = response.headers().get("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_cors_preflight_for_allowed_origin() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/auth/login")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "http://localhost:5173"
    );
}
