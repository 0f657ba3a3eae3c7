//! Request extractors and middleware for cross-cutting concerns.
//!
//! - [`auth`]: bearer-token authentication
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <access token>`
//! 2. [`auth::AuthUser`] verifies the JWT signature and expiry
//! 3. The token subject is looked up in the identity store
//! 4. The handler runs with the resolved user, or the request is rejected
//!    with `401 UNAUTHORIZED`

pub mod auth;
