use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    delete_user, get_organizer, get_settings, list_sports, list_users, reset_user_password,
    update_settings, verify_user,
};
use crate::middleware::auth::{AuthKeys, require_auth};
use crate::state::AppState;

/// `/sports`, mounted at the root
pub fn sports_routes() -> Router<AppState> {
    Router::new().route("/sports", get(list_sports))
}

/// Admin user management, mounted under `/api`
pub fn admin_routes(keys: AuthKeys) -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/user-action/verify/:id", put(verify_user))
        .route("/user-action/delete/:id", delete(delete_user))
        .route("/user-action/reset-password/:id", post(reset_user_password))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}

pub fn settings_routes(keys: AuthKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/:id", put(update_settings))
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    Router::new().route("/:id", get(get_settings)).merge(protected)
}

pub fn organizer_routes() -> Router<AppState> {
    Router::new().route("/:id", get(get_organizer))
}
