//! # devicegate Auth
//!
//! Token types and utilities for the devicegate API.
//!
//! - [`claims`]: access token claims and the [`Role`] enum
//! - [`jwt`]: access token creation and verification (HS256)
//! - [`refresh`]: opaque refresh token generation
//!
//! Access tokens are self-contained JWTs whose `sub` is the username.
//! Refresh tokens carry no data at all; they are random hex strings that the
//! identity store maps to a username.
//!
//! # Example
//!
//! ```ignore
//! use devicegate_auth::{Role, create_access_token, generate_refresh_token, verify_token};
//! use devicegate_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let access = create_access_token("alice", Role::Viewer, &config)?;
//! let refresh = generate_refresh_token();
//!
//! let claims = verify_token(&access, &config)?;
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod claims;
pub mod jwt;
pub mod refresh;

pub use claims::{Claims, Role};
pub use jwt::{create_access_token, verify_token};
pub use refresh::{REFRESH_TOKEN_BYTES, generate_refresh_token};
