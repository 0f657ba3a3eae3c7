//! Metrics stub configuration.
//!
//! # Environment Variables
//!
//! - `METRICS_UPTIME_MODE`: `per-request` (default) bumps `uptimeSeconds` on
//!   every snapshot; `wall-clock` bumps it once per second from a background
//!   task.
//! - `METRICS_SENSOR_PROFILE`: `constant` (default) serves fixed readings;
//!   `simulated` serves a slow sine wave with jitter.

use std::env;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UptimeMode {
    #[default]
    PerRequest,
    WallClock,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SensorProfile {
    #[default]
    Constant,
    Simulated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant `{}`", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for UptimeMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-request" | "per_request" | "request" => Ok(UptimeMode::PerRequest),
            "wall-clock" | "wall_clock" | "clock" => Ok(UptimeMode::WallClock),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl FromStr for SensorProfile {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "constant" => Ok(SensorProfile::Constant),
            "simulated" => Ok(SensorProfile::Simulated),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsConfig {
    pub uptime_mode: UptimeMode,
    pub sensor_profile: SensorProfile,
}

impl MetricsConfig {
    pub fn from_env() -> Self {
        Self {
            uptime_mode: env::var("METRICS_UPTIME_MODE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            sensor_profile: env::var("METRICS_SENSOR_PROFILE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }
}
