use axum::{Router, middleware, routing::post};

use super::handlers::{
    forgot_password, login, logout, register, reset_password, update_password,
};
use crate::middleware::auth::{AuthKeys, require_auth};
use crate::state::AppState;

/// Account routes mounted at the root
pub fn routes(keys: AuthKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/logout", post(logout))
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
        .merge(protected)
}

/// Password change for the signed-in user, mounted under `/api`
pub fn account_routes(keys: AuthKeys) -> Router<AppState> {
    Router::new()
        .route("/update-password", post(update_password))
        .route_layer(middleware::from_fn_with_state(keys, require_auth))
}
