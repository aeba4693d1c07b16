use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{create_review, list_reviews};
use crate::middleware::auth::{AuthKeys, require_auth};
use crate::state::AppState;

pub fn routes(keys: AuthKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_review))
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    Router::new()
        .route("/:reviewee_id", get(list_reviews))
        .merge(protected)
}
