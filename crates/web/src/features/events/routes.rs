use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_event, delete_event, get_event, get_event_details, list_categories, list_events,
    list_sponsors, update_event, update_event_fields,
};
use crate::middleware::auth::{AuthKeys, require_auth};
use crate::state::AppState;

pub fn routes(keys: AuthKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_event))
        .route("/:id", put(update_event))
        .route("/:id/simple", put(update_event_fields))
        .route("/:id", delete(delete_event))
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    Router::new()
        .route("/", get(list_events))
        .route("/categories", get(list_categories))
        .route("/sponsors", get(list_sponsors))
        .route("/:id", get(get_event))
        .route("/:id/details", get(get_event_details))
        .merge(protected)
}
