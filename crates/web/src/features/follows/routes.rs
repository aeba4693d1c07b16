use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{follow_user, follower_count, following_count, is_following, unfollow_user};
use crate::middleware::auth::{AuthKeys, require_auth};
use crate::state::AppState;

pub fn routes(keys: AuthKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/follow", post(follow_user))
        .route("/unfollow", delete(unfollow_user))
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    Router::new()
        .route("/is-following", get(is_following))
        .route("/:user_id/followers", get(follower_count))
        .route("/:user_id/following", get(following_count))
        .merge(protected)
}
