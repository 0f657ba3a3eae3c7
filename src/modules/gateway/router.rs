use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_status;

pub fn init_gateway_router() -> Router<AppState> {
    Router::new().route("/status", get(get_status))
}
