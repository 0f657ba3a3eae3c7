//! Stubbed device metrics.
//!
//! Snapshots are either constant or a simulated waveform; `uptimeSeconds`
//! advances per request or once per wall-clock second depending on
//! `METRICS_UPTIME_MODE`.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
