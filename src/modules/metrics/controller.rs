use axum::Json;
use axum::extract::State;
use devicegate_core::ErrorBody;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::model::MetricsSnapshot;

/// Latest device metrics snapshot
#[utoipa::path(
    get,
    path = "/api/v1/metrics/current",
    responses(
        (status = 200, description = "Current snapshot", body = MetricsSnapshot),
        (status = 401, description = "Missing or invalid access token", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Metrics"
)]
pub async fn get_current_metrics(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
