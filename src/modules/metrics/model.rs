use serde::Serialize;
use utoipa::ToSchema;

/// Point-in-time device reading served by `GET /api/v1/metrics/current`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub temperature_c: f64,
    pub cpu_load_percent: f64,
    pub ram_load_percent: f64,
    pub uptime_seconds: u64,
    pub supply_voltage_v: f64,
    /// RFC 3339, UTC
    pub timestamp_utc: String,
}
