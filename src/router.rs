use crate::docs::ApiDoc;
use crate::logging::{REQUEST_ID_HEADER, logging_middleware};
use crate::modules::auth::router::init_auth_router;
use crate::modules::gateway::router::init_gateway_router;
use crate::modules::metrics::router::init_metrics_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method, Uri};
use axum::{Router, middleware};
use devicegate_core::AppError;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api/v1",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/metrics", init_metrics_router())
                .nest("/gateway", init_gateway_router()),
        )
        .fallback(route_not_found)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    REQUEST_ID_HEADER,
                ])
                .expose_headers([REQUEST_ID_HEADER])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}
