use axum::{
    Router, middleware,
    routing::{get, put},
};

use super::handlers::{list_stats, upsert_stats};
use crate::middleware::auth::{AuthKeys, require_auth};
use crate::state::AppState;

pub fn routes(keys: AuthKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/:id", put(upsert_stats))
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    Router::new().route("/", get(list_stats)).merge(protected)
}
