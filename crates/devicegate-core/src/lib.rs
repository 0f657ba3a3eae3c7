//! # devicegate Core
//!
//! Core types shared by every devicegate crate:
//!
//! - [`errors`]: the application error type and its JSON error envelope
//! - [`password`]: bcrypt password hashing and verification
//! - [`serde`]: custom deserialization helpers for request DTOs
//!
//! # Example
//!
//! ```ignore
//! use devicegate_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("hunter2", 4)?;
//! if !verify_password("hunter2", &hash)? {
//!     return Err(AppError::unauthorized("Invalid username or password"));
//! }
//! ```

pub mod errors;
pub mod password;
pub mod serde;

pub use errors::{AppError, ErrorBody, ErrorCode, ErrorDetail};
pub use password::{MAX_PASSWORD_BYTES, hash_password, verify_password};
