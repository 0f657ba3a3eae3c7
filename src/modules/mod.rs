pub mod auth;
pub mod gateway;
pub mod metrics;
