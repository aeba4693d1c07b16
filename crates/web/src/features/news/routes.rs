use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    delete_draft, delete_news, get_news, list_drafts, list_news, publish_news, save_draft,
    update_news,
};
use crate::middleware::auth::{AuthKeys, require_auth};
use crate::state::AppState;

/// Mounted at both `/api/news` and `/api/news-drafts`
pub fn routes(keys: AuthKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/publish", post(publish_news))
        .route("/drafts/save", post(save_draft))
        .route("/drafts/:id", get(list_drafts).delete(delete_draft))
        .route("/:id", put(update_news))
        .route("/:id", delete(delete_news))
        .route_layer(middleware::from_fn_with_state(keys, require_auth));

    Router::new()
        .route("/", get(list_news))
        .route("/:id", get(get_news))
        .merge(protected)
}
