//! # devicegate
//!
//! A small authentication and device-metrics gateway built with Rust and Axum.
//!
//! ## Endpoints
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | POST | `/api/v1/auth/register` | - |
//! | POST | `/api/v1/auth/login` | - |
//! | POST | `/api/v1/auth/refresh` | - |
//! | POST | `/api/v1/auth/logout` | Bearer |
//! | GET | `/api/v1/auth/me` | Bearer |
//! | GET | `/api/v1/metrics/current` | Bearer |
//! | GET | `/api/v1/gateway/status` | - |
//!
//! Unknown paths answer `404` with `{"error":{"code":"NOT_FOUND",...}}`.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # clap command line
//! ├── middleware/       # bearer-token extractor
//! ├── modules/          # feature modules
//! │   ├── auth/        # register, login, refresh, logout, me
//! │   ├── metrics/     # stubbed device metrics
//! │   └── gateway/     # status probe
//! └── store/            # users and refresh sessions, optional state file
//! ```
//!
//! Each feature module has `controller.rs` (handlers), `model.rs` (DTOs),
//! `router.rs` and, where there is logic, `service.rs`.
//!
//! ## Tokens
//!
//! - **Access token**: HS256 JWT, `sub` = username, 15 minutes by default
//! - **Refresh token**: 48 hex chars, stored server side, 30 days by default,
//!   removed on logout
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=change-me
//! JWT_ACCESS_EXPIRY=900
//! JWT_REFRESH_EXPIRY=2592000
//! ALLOWED_ORIGINS=http://localhost:5173
//! METRICS_UPTIME_MODE=per-request     # or wall-clock
//! METRICS_SENSOR_PROFILE=constant     # or simulated
//! STATE_FILE=/var/lib/devicegate/state.json
//! BCRYPT_COST=12
//! ```

pub mod cli;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod validator;

pub use devicegate_auth;
pub use devicegate_config;
pub use devicegate_core;
