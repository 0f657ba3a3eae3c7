use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GatewayStatus {
    pub service: String,
    pub opcua: String,
    pub cache: String,
}

impl GatewayStatus {
    /// The only status the gateway ever reports.
    pub fn healthy() -> Self {
        Self {
            service: "ok".to_string(),
            opcua: "simulated".to_string(),
            cache: "ready".to_string(),
        }
    }
}
