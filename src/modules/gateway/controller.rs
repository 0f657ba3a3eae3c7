use axum::Json;

use super::model::GatewayStatus;

/// Gateway status probe (no authentication)
#[utoipa::path(
    get,
    path = "/api/v1/gateway/status",
    responses(
        (status = 200, description = "Gateway is up", body = GatewayStatus)
    ),
    tag = "Gateway"
)]
pub async fn get_status() -> Json<GatewayStatus> {
    Json(GatewayStatus::healthy())
}
