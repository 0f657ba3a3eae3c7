//! Registration, login, token refresh, logout and profile endpoints.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
