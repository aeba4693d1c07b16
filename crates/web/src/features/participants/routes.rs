use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{
    check_participation, count_participants, join_event, leave_event, list_participants,
};
use crate::middleware::auth::{AuthKeys, require_auth};
use crate::state::AppState;

pub fn routes(keys: AuthKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/:event_id/join", post(join_event))
        .route("/:event_id/leave", delete(leave_event))
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    Router::new()
        .route("/:event_id/participants", get(list_participants))
        .route("/:event_id/count", get(count_participants))
        .route("/:event_id/check/:user_id", get(check_participation))
        .merge(protected)
}
