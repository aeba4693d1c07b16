use axum::{Router, routing::get};

use super::handlers::{get_athlete, list_athletes};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_athletes))
        .route("/:id", get(get_athlete))
}
