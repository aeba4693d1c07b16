use axum::{Router, routing::get};

use super::handlers::platform_stats;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(platform_stats))
}
