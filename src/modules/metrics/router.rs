use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_current_metrics;

pub fn init_metrics_router() -> Router<AppState> {
    Router::new().route("/current", get(get_current_metrics))
}
