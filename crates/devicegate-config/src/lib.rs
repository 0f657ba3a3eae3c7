//! # devicegate Config
//!
//! Configuration types for the devicegate API, loaded from environment
//! variables:
//!
//! - [`jwt`]: access token signing and token lifetimes
//! - [`cors`]: CORS allowed origins
//! - [`metrics`]: uptime counting mode and sensor profile
//! - [`store`]: optional state file and password hashing cost
//!
//! # Example
//!
//! ```ignore
//! use devicegate_config::{CorsConfig, JwtConfig, MetricsConfig, StoreConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let metrics_config = MetricsConfig::from_env();
//! let store_config = StoreConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod metrics;
pub mod store;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use metrics::{MetricsConfig, SensorProfile, UptimeMode};
pub use store::StoreConfig;
